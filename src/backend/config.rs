use std::{collections::BTreeMap, time::Duration};

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The configuration needed to reach the webmail server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    /// Base url the `emails` endpoints are relative to.
    pub url: String,
    pub timeout: Duration,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl ServerConfig {
    pub fn new(url: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
        }
    }
}
