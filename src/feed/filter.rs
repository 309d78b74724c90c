use crate::domain::Post;

/// True when the post content contains every required hashtag. An empty set
/// matches everything. Matching is a case-insensitive substring check on
/// `#tag`, not word-boundary matching: "#tagging" satisfies a filter for
/// "tag". Tags are expected lower-cased (Config::resolve does this).
pub fn matches(post: &Post, hashtags: &[String]) -> bool {
    if hashtags.is_empty() {
        return true;
    }

    let content = post.content.to_lowercase();
    hashtags.iter().all(|tag| content.contains(&format!("#{}", tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_content(content: &str) -> Post {
        Post {
            title: "title".to_string(),
            url: "https://example.com/1".to_string(),
            verb: "post".to_string(),
            published: "2017-05-01T10:00:00.000Z".to_string(),
            author: "Andrea".to_string(),
            content: content.to_string(),
            annotation: None,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let post = post_with_content("no hashtags here");
        assert!(matches(&post, &[]));
    }

    #[test]
    fn test_single_tag_match() {
        let post = post_with_content("released today #linux");
        assert!(matches(&post, &["linux".to_string()]));
    }

    #[test]
    fn test_single_tag_no_match() {
        let post = post_with_content("released today #linux");
        assert!(!matches(&post, &["kde".to_string()]));
    }

    #[test]
    fn test_all_tags_required() {
        let post = post_with_content("plasma update #linux #kde");
        assert!(matches(&post, &["linux".to_string(), "kde".to_string()]));

        let post = post_with_content("plasma update #kde");
        assert!(!matches(&post, &["linux".to_string(), "kde".to_string()]));
    }

    #[test]
    fn test_case_insensitive() {
        let post = post_with_content("big news #Linux");
        assert!(matches(&post, &["linux".to_string()]));
    }

    #[test]
    fn test_substring_semantics() {
        // Deliberately substring-based: "#tagging" satisfies "tag" and
        // "#category" satisfies "cat".
        let post = post_with_content("thoughts on #tagging");
        assert!(matches(&post, &["tag".to_string()]));

        let post = post_with_content("filed under #category");
        assert!(matches(&post, &["cat".to_string()]));
    }

    #[test]
    fn test_plain_word_without_hash_does_not_match() {
        let post = post_with_content("I use linux daily");
        assert!(!matches(&post, &["linux".to_string()]));
    }
}
