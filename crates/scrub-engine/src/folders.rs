//! Folder selection over a set of posts

use std::collections::BTreeSet;

use scrub_core::Post;

/// Every folder used by any post, sorted
pub fn available_folders(posts: &[Post]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.folders.iter().cloned())
        .collect()
}

/// Posts filed under `folder`, compared case-insensitively
pub fn filter_by_folder<'a>(posts: &'a [Post], folder: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.in_folder(folder)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<Post> {
        vec![
            Post::new("a", "Lab 1", "").with_folders(["lab1", "logistics"]),
            Post::new("b", "Exam", "").with_folders(["exam"]),
            Post::new("c", "Lab 1 again", "").with_folders(["Lab1"]),
            Post::new("d", "Unfiled", ""),
        ]
    }

    #[test]
    fn test_available_folders_sorted_unique() {
        let folders: Vec<String> = available_folders(&posts()).into_iter().collect();
        assert_eq!(folders, vec!["Lab1", "exam", "lab1", "logistics"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let posts = posts();
        let ids: Vec<&str> = filter_by_folder(&posts, "LAB1")
            .iter()
            .map(|p| p.post_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_unknown_folder() {
        assert!(filter_by_folder(&posts(), "hw9").is_empty());
        assert!(available_folders(&[]).is_empty());
    }
}
