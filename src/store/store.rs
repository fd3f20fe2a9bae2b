// The store is intentionally plain:
// one owned map
// synchronous reads and writes
// no persistence, no indexes

use std::collections::HashMap;

use chrono::Utc;
use log::{debug, trace};

use crate::document::{Document, DocumentDraft};
use crate::search::SearchRequest;
use crate::types::identifiers::DocumentId;

/// An owned, instance-scoped collection of documents keyed by id.
///
/// Writes take `&mut self` and reads take `&self`; that borrow discipline
/// is the entire concurrency story. Ids are unique within a store and the
/// collection has no ordering among documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocumentId, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            documents: HashMap::new(),
        }
    }

    /// Upsert a draft and return the stored record.
    ///
    /// A draft without an id (or with an empty one) gets a generated id and
    /// `created = now`. A draft addressing an existing id replaces that
    /// record wholesale, except that `created` is never changed by an
    /// update: the draft's own value wins when set, otherwise the prior
    /// record's stamp is carried over. Id collisions are last-write-wins;
    /// there is no conflict error.
    pub fn save(&mut self, draft: DocumentDraft) -> Document {
        let document = match draft.id.clone().filter(|id| !id.is_empty()) {
            None => Document {
                id: DocumentId::generate(),
                title: draft.title,
                content: draft.content,
                author: draft.author,
                created: Utc::now(),
            },
            Some(id) => {
                let prior = self.documents.remove(&id);
                let created = draft
                    .created
                    .or(prior.map(|existing| existing.created))
                    .unwrap_or_else(Utc::now);

                Document {
                    id,
                    title: draft.title,
                    content: draft.content,
                    author: draft.author,
                    created,
                }
            }
        };

        debug!("saved document {}", document.id);
        self.documents.insert(document.id.clone(), document.clone());
        document
    }

    /// Point lookup by id. Absence is the normal not-found outcome, not an
    /// error.
    pub fn find_by_id(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    /// All documents satisfying every active criterion of `request`.
    ///
    /// An empty request matches everything. Result order is unspecified;
    /// there is no pagination and no result-size limit.
    pub fn search(&self, request: &SearchRequest) -> Vec<&Document> {
        let matched: Vec<&Document> = self
            .documents
            .values()
            .filter(|doc| {
                let hit = request.matches(doc);
                trace!("document {}: match={}", doc.id, hit);
                hit
            })
            .collect();

        debug!(
            "search matched {} of {} documents",
            matched.len(),
            self.documents.len()
        );
        matched
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over stored documents in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }
}
