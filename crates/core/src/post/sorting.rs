use super::types::Post;

/// Sorts posts newest first by comparing their `createdAt` strings.
///
/// Posts with equal timestamps end up in no particular order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_unstable_by(|a, b| b.created_at.cmp(&a.created_at));
}
