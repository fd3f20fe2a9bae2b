use chrono::{DateTime, TimeZone, Utc};
use docstore_core::document::{Author, DocumentDraft, DocumentId};
use docstore_core::search::SearchRequest;
use docstore_core::store::DocumentStore;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 0, 0, 0).unwrap()
}

fn save_doc(store: &mut DocumentStore, id: &str, title: &str, content: &str, author_id: &str) {
    store.save(
        DocumentDraft::new(title, content, Author::new(author_id, "Author Name"))
            .with_id(DocumentId::new(id))
            .with_created(day(1)),
    );
}

fn seeded_store() -> DocumentStore {
    let mut store = DocumentStore::new();
    save_doc(&mut store, "1", "Hello World", "Java programming guide", "1");
    save_doc(&mut store, "2", "Hi there", "C++ reference manual", "2");
    save_doc(&mut store, "3", "Hello Rust", "Systems programming in Rust", "1");
    store
}

fn matched_ids(store: &DocumentStore, request: &SearchRequest) -> Vec<String> {
    let mut ids: Vec<String> = store
        .search(request)
        .iter()
        .map(|doc| doc.id.as_str().to_string())
        .collect();
    ids.sort_unstable();
    ids
}

#[test]
fn empty_request_matches_everything() {
    let store = seeded_store();

    let result = store.search(&SearchRequest::new());
    assert_eq!(result.len(), 3);
}

#[test]
fn title_prefix_is_a_case_sensitive_prefix_match() {
    let store = seeded_store();

    let request = SearchRequest::new().with_title_prefixes(["Hello"]);
    assert_eq!(matched_ids(&store, &request), vec!["1", "3"]);

    // Prefix match runs from position 0; "there" appears mid-title only
    let request = SearchRequest::new().with_title_prefixes(["there"]);
    assert!(matched_ids(&store, &request).is_empty());

    let request = SearchRequest::new().with_title_prefixes(["hello"]);
    assert!(matched_ids(&store, &request).is_empty());
}

#[test]
fn any_listed_prefix_suffices() {
    let store = seeded_store();

    let request = SearchRequest::new().with_title_prefixes(["Hello", "Hi"]);
    assert_eq!(matched_ids(&store, &request), vec!["1", "2", "3"]);
}

#[test]
fn content_filter_is_a_substring_match() {
    let store = seeded_store();

    let request = SearchRequest::new().with_contains_contents(["Java"]);
    assert_eq!(matched_ids(&store, &request), vec!["1"]);

    let request = SearchRequest::new().with_contains_contents(["programming"]);
    assert_eq!(matched_ids(&store, &request), vec!["1", "3"]);

    let request = SearchRequest::new().with_contains_contents(["java"]);
    assert!(matched_ids(&store, &request).is_empty());
}

#[test]
fn author_filter_is_set_membership() {
    let store = seeded_store();

    let request = SearchRequest::new().with_author_ids(["1"]);
    assert_eq!(matched_ids(&store, &request), vec!["1", "3"]);

    let request = SearchRequest::new().with_author_ids(["2", "9"]);
    assert_eq!(matched_ids(&store, &request), vec!["2"]);
}

#[test]
fn created_bounds_are_inclusive() {
    let mut store = DocumentStore::new();
    for (id, d) in [("early", 1), ("mid", 10), ("late", 20)] {
        store.save(
            DocumentDraft::new("Title", "content", Author::new("1", "Author Name"))
                .with_id(DocumentId::new(id))
                .with_created(day(d)),
        );
    }

    let request = SearchRequest::new().with_created_from(day(10));
    assert_eq!(matched_ids(&store, &request), vec!["late", "mid"]);

    let request = SearchRequest::new().with_created_to(day(10));
    assert_eq!(matched_ids(&store, &request), vec!["early", "mid"]);

    let request = SearchRequest::new()
        .with_created_from(day(10))
        .with_created_to(day(10));
    assert_eq!(matched_ids(&store, &request), vec!["mid"]);

    let request = SearchRequest::new()
        .with_created_from(day(11))
        .with_created_to(day(19));
    assert!(matched_ids(&store, &request).is_empty());
}

#[test]
fn populated_fields_combine_with_and_semantics() {
    let store = seeded_store();

    let request = SearchRequest::new()
        .with_title_prefixes(["Hello"])
        .with_author_ids(["1"])
        .with_contains_contents(["Rust"]);
    assert_eq!(matched_ids(&store, &request), vec!["3"]);

    // Same prefixes, but an author no Hello-document has
    let request = SearchRequest::new()
        .with_title_prefixes(["Hello"])
        .with_author_ids(["2"]);
    assert!(matched_ids(&store, &request).is_empty());
}

#[test]
fn empty_lists_constrain_nothing() {
    let store = seeded_store();

    let request = SearchRequest::new()
        .with_title_prefixes(Vec::<String>::new())
        .with_contains_contents(Vec::<String>::new())
        .with_author_ids(Vec::<String>::new());
    assert_eq!(matched_ids(&store, &request), vec!["1", "2", "3"]);
}

#[test]
fn search_on_empty_store_is_empty() {
    let store = DocumentStore::new();

    assert!(store.search(&SearchRequest::new()).is_empty());
}

#[test]
fn search_sees_the_latest_saved_version() {
    let mut store = seeded_store();
    save_doc(&mut store, "1", "Goodbye World", "Kotlin guide", "1");

    let request = SearchRequest::new().with_title_prefixes(["Hello"]);
    assert_eq!(matched_ids(&store, &request), vec!["3"]);

    let request = SearchRequest::new().with_title_prefixes(["Goodbye"]);
    assert_eq!(matched_ids(&store, &request), vec!["1"]);
}
