//! Derived listings over a catalog: category counts and the date archive

use indexmap::IndexMap;

use super::date::parse_date_string;
use crate::catalog::Post;

/// Bucket name for posts with no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group label for posts whose date is missing or unparsable
pub const UNDATED: &str = "Undated";

/// Count posts per category, in first-seen order
///
/// Posts without a category are counted under [`UNCATEGORIZED`].
pub fn count_categories(posts: &[Post]) -> Vec<(String, usize)> {
    let mut categories: IndexMap<String, usize> = IndexMap::new();

    for post in posts {
        let name = match post.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        };
        *categories.entry(name.to_string()).or_insert(0) += 1;
    }

    categories.into_iter().collect()
}

/// Group posts by month and year for the archive view
///
/// Groups come out newest-first with keys like `March 2024`; posts whose
/// date does not parse land in a trailing [`UNDATED`] group.
pub fn group_by_month(posts: &[Post]) -> Vec<(String, Vec<&Post>)> {
    let mut dated: Vec<(&Post, chrono::DateTime<chrono::Local>)> = Vec::new();
    let mut undated: Vec<&Post> = Vec::new();

    for post in posts {
        match post.date.as_deref().and_then(parse_date_string) {
            Some(dt) => dated.push((post, dt)),
            None => undated.push(post),
        }
    }

    // Newest first; stable, so same-month posts keep catalog order
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let mut groups: IndexMap<String, Vec<&Post>> = IndexMap::new();
    for (post, dt) in dated {
        let key = dt.format("%B %Y").to_string();
        groups.entry(key).or_default().push(post);
    }

    let mut result: Vec<(String, Vec<&Post>)> = groups.into_iter().collect();
    if !undated.is_empty() {
        result.push((UNDATED.to_string(), undated));
    }
    result
}
