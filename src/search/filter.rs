// Conjunctive matching of documents against a search request.
// String criteria are case-sensitive: exact-character prefix and
// substring checks, no normalization.

use crate::document::Document;
use crate::search::request::SearchRequest;

pub(super) fn matches(doc: &Document, request: &SearchRequest) -> bool {
    matches_title(doc, request)
        && matches_content(doc, request)
        && matches_author(doc, request)
        && matches_created(doc, request)
}

fn matches_title(doc: &Document, request: &SearchRequest) -> bool {
    match active_list(&request.title_prefixes) {
        Some(prefixes) => prefixes.iter().any(|p| doc.title.starts_with(p.as_str())),
        None => true,
    }
}

fn matches_content(doc: &Document, request: &SearchRequest) -> bool {
    match active_list(&request.contains_contents) {
        Some(needles) => needles.iter().any(|n| doc.content.contains(n.as_str())),
        None => true,
    }
}

fn matches_author(doc: &Document, request: &SearchRequest) -> bool {
    match active_list(&request.author_ids) {
        Some(ids) => ids.contains(&doc.author.id),
        None => true,
    }
}

fn matches_created(doc: &Document, request: &SearchRequest) -> bool {
    let after_from = request.created_from.map_or(true, |from| doc.created >= from);
    let before_to = request.created_to.map_or(true, |to| doc.created <= to);
    after_from && before_to
}

/// An empty list behaves like an absent field: it constrains nothing.
fn active_list<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|l| !l.is_empty())
}
