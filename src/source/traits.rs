use crate::domain::Page;
use crate::errors::FeedplusResult;

/// One page of public activities per call. Implementations perform exactly
/// one request; callers wanting retries can wrap the trait.
#[cfg_attr(test, mockall::automock)]
pub trait ActivitySource: Send + Sync {
    /// Fetch the page identified by `page_token`, or the first page when the
    /// token is absent.
    fn fetch_page(&self, page_token: Option<String>) -> FeedplusResult<Page>;
}
