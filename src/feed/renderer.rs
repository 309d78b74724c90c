use crate::domain::{FeedItem, Post};
use crate::errors::{FeedplusError, FeedplusResult};

const TITLE_MAX: usize = 40;
const TITLE_KEEP: usize = 37;

/// Render one post into a feed item. Attachment fields are accessed
/// strictly: a first attachment missing a field the markup needs fails the
/// run rather than producing a partial item.
pub fn render(post: &Post) -> FeedplusResult<FeedItem> {
    Ok(FeedItem {
        title: elide_title(&post.title),
        link: post.url.clone(),
        description: render_description(post)?,
        pub_date: post.published.clone(),
        author: post.author.clone(),
    })
}

/// Elide the title when text is very long: 40 chars and over become the
/// first 37 chars plus "...", an exactly 40-char result.
fn elide_title(title: &str) -> String {
    if title.chars().count() >= TITLE_MAX {
        let mut elided: String = title.chars().take(TITLE_KEEP).collect();
        elided.push_str("...");
        elided
    } else {
        title.to_string()
    }
}

fn missing(field: &str) -> FeedplusError {
    FeedplusError::MalformedPost(field.to_string())
}

fn render_description(post: &Post) -> FeedplusResult<String> {
    let mut description = String::new();

    // A reshare's own commentary comes first, content appended right after
    // it with no separator.
    if post.verb == "share" {
        if let Some(annotation) = &post.annotation {
            description.push_str(annotation);
        }
    }
    description.push_str(&post.content);

    // Only the first attachment is ever rendered.
    if let Some(first) = post.attachments.first() {
        description.push_str("<br /><br />");

        if let Some(image) = &first.full_image {
            let url = image
                .url
                .as_deref()
                .ok_or_else(|| missing("attachments[0].fullImage.url"))?;
            description.push_str(&format!("<a href='{url}'><img src='{url}'></a>"));
        }

        let object_type = first
            .object_type
            .as_deref()
            .ok_or_else(|| missing("attachments[0].objectType"))?;
        if object_type == "article" {
            let url = first
                .url
                .as_deref()
                .ok_or_else(|| missing("attachments[0].url"))?;
            let name = first
                .display_name
                .as_deref()
                .ok_or_else(|| missing("attachments[0].displayName"))?;
            description.push_str("<br /><br />");
            description.push_str(&format!("<a href='{url}'>{name}</a>"));
        }
    }

    Ok(description)
}
