use std::collections::BTreeMap;

use serde::Serialize;

pub const SERVICE_NAME: &str = "Data Processor";
pub const SERVICE_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceDescriptor {
    pub fn current() -> Self {
        Self {
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
            endpoints: BTreeMap::from([
                ("/", "GET - service descriptor"),
                ("/health", "GET - health check"),
                ("/process", "POST - process data"),
            ]),
        }
    }
}
