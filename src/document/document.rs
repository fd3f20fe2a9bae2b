use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{AuthorId, DocumentId};

/// The author reference carried by every document. Nothing beyond this
/// pair is tracked; there is no referential integrity with any author
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Author {
            id: AuthorId::new(id),
            name: name.into(),
        }
    }
}

/// A stored document record.
///
/// `id` and `created` are always present here; absence only exists on the
/// [`DocumentDraft`] input side. `created` is stamped at first save and
/// never altered by later saves under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Document {
    /// Re-draft a stored record for an update round-trip, carrying its id
    /// and creation timestamp over.
    pub fn draft(&self) -> DocumentDraft {
        DocumentDraft {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            created: Some(self.created),
        }
    }
}

/// Input to [`DocumentStore::save`](crate::store::DocumentStore::save): a
/// document that may not have been assigned an id or creation timestamp yet.
///
/// Construction is record-update style: start from [`DocumentDraft::new`]
/// and override fields with the `with_*` methods, each of which consumes
/// and returns the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        DocumentDraft {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
