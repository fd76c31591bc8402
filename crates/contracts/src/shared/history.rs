use serde::{Deserialize, Serialize};

/// State object stored with every history entry the client writes.
///
/// `page` is the raw page name, which may fall outside the whitelist for
/// the entry created at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}
