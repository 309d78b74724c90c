/// One rendered feed entry, derived from exactly one post. The publish date
/// is carried verbatim from the API, not reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
    pub author: String,
}
