//! Pieces shared by every route group.

pub mod tracing;

use serde::Deserialize;

/// `?q=` as sent by the search box and the autocomplete widget.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}
