use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::search::filter;
use crate::types::identifiers::AuthorId;

/// A declarative filter over stored documents.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension, so the default request matches every document. Populated
/// fields combine conjunctively (AND), while the listed alternatives
/// inside a single field combine disjunctively (OR).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Match documents whose title starts with any of these prefixes.
    pub title_prefixes: Option<Vec<String>>,
    /// Match documents whose content contains any of these substrings.
    pub contains_contents: Option<Vec<String>>,
    /// Match documents whose author id is among these.
    pub author_ids: Option<Vec<AuthorId>>,
    /// Inclusive lower bound on the creation timestamp.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_contains_contents<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_contents = Some(substrings.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_ids = Some(ids.into_iter().map(AuthorId::new).collect());
        self
    }

    pub fn with_created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    pub fn with_created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// True when `doc` satisfies every active criterion of this request.
    pub fn matches(&self, doc: &Document) -> bool {
        filter::matches(doc, self)
    }
}
