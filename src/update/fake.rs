//! In-memory update server for tests

use std::cell::RefCell;
use std::collections::HashMap;

use super::Fetch;
use crate::error::{Result, http};

/// Serves fixed documents by URL and answers 404 for anything else
#[derive(Debug, Default)]
pub struct StaticFetcher {
    documents: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StaticFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.requested.borrow_mut().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| http::status(url, 404))
    }
}
