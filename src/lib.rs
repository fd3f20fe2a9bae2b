//! Embeddable in-memory document store.
//!
//! `docstore-core` provides upsert (`save`), exact-id lookup, and
//! multi-criteria filtered search over an owned, instance-scoped document
//! collection. There is no persistence, no concurrency control, and no
//! network surface; the whole contract is the in-process API.

pub mod document;
pub mod search;
pub mod store;
pub mod types;
