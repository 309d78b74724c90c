use serde::Deserialize;

use crate::errors::{FeedplusError, FeedplusResult};

/// One page of the public-activities listing. Deserialization fails when the
/// `items` key is absent, which surfaces as a malformed-response error at the
/// fetch boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<RawPost>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A post as it arrives from the API: every field optional, validated into
/// [`Post`] before any of it is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub title: Option<String>,
    pub url: Option<String>,
    pub verb: Option<String>,
    pub published: Option<String>,
    pub annotation: Option<String>,
    pub actor: Option<RawActor>,
    pub object: Option<RawObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActor {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObject {
    pub content: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub object_type: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub full_image: Option<FullImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullImage {
    pub url: Option<String>,
}

/// A validated post. Construction rejects records missing any required
/// field, so downstream filtering and rendering never see a half-formed one.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub url: String,
    pub verb: String,
    pub published: String,
    pub author: String,
    pub content: String,
    pub annotation: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl RawPost {
    pub fn validate(self) -> FeedplusResult<Post> {
        let object = self.object.ok_or_else(|| missing("object"))?;

        Ok(Post {
            title: self.title.ok_or_else(|| missing("title"))?,
            url: self.url.ok_or_else(|| missing("url"))?,
            verb: self.verb.ok_or_else(|| missing("verb"))?,
            published: self.published.ok_or_else(|| missing("published"))?,
            author: self
                .actor
                .and_then(|a| a.display_name)
                .ok_or_else(|| missing("actor.displayName"))?,
            content: object.content.ok_or_else(|| missing("object.content"))?,
            annotation: self.annotation,
            attachments: object.attachments.unwrap_or_default(),
        })
    }
}

fn missing(field: &str) -> FeedplusError {
    FeedplusError::MalformedPost(field.to_string())
}
