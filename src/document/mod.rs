pub mod document;

pub use crate::types::identifiers::{AuthorId, DocumentId};
pub use document::{Author, Document, DocumentDraft};
