//! Query operations over a normalized catalog
//!
//! Pure functions over `&[Post]`. A miss is a normal result (`None` or an
//! empty vec), never an error; the catalog passed in has already been
//! normalized, so nothing here checks for missing fields.

use std::collections::HashSet;

use super::post::Post;
use crate::helpers::date::timestamp_or_earliest;

/// Look up a post by id
pub fn find_by_id<'a>(catalog: &'a [Post], id: &str) -> Option<&'a Post> {
    catalog.iter().find(|p| p.id == id)
}

/// The post shown in the featured slot
///
/// First `featured` record in catalog order. The first-in-order tie-break
/// is a contract: exactly one post fills the slot in any render, so the
/// pick must be deterministic.
pub fn find_featured(catalog: &[Post]) -> Option<&Post> {
    catalog.iter().find(|p| p.featured)
}

/// Posts related to the one being viewed, by exact category match
///
/// Uncategorized posts never cross-link: a `None` or empty category yields
/// no related posts, even against other uncategorized posts. Catalog order
/// is preserved.
pub fn find_related<'a>(
    catalog: &'a [Post],
    category: Option<&str>,
    exclude_id: &str,
    limit: usize,
) -> Vec<&'a Post> {
    let category = match category {
        Some(c) if !c.is_empty() => c,
        _ => return Vec::new(),
    };

    catalog
        .iter()
        .filter(|p| p.category.as_deref() == Some(category) && p.id != exclude_id)
        .take(limit)
        .collect()
}

/// Non-featured posts, newest first
///
/// The record matching `exclude_featured_id` and every featured record are
/// dropped, then the rest sort descending by parsed date. Unparsable and
/// missing dates sort oldest. The sort is stable, so equal-date records
/// keep their catalog order and repeated calls are reproducible.
pub fn find_recent<'a>(
    catalog: &'a [Post],
    exclude_featured_id: Option<&str>,
    limit: usize,
) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = catalog
        .iter()
        .filter(|p| p.is_regular() && Some(p.id.as_str()) != exclude_featured_id)
        .collect();

    posts.sort_by(|a, b| {
        timestamp_or_earliest(b.date.as_deref()).cmp(&timestamp_or_earliest(a.date.as_deref()))
    });

    posts.truncate(limit);
    posts
}

/// Non-featured posts not already shown elsewhere on the page
///
/// Fills a secondary "read more" list without duplicating cards the recent
/// section already rendered. Catalog order is preserved.
pub fn find_overflow<'a>(
    catalog: &'a [Post],
    already_shown: &HashSet<String>,
    limit: usize,
) -> Vec<&'a Post> {
    catalog
        .iter()
        .filter(|p| p.is_regular() && !already_shown.contains(&p.id))
        .take(limit)
        .collect()
}
