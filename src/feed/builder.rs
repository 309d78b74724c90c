use rss::{Channel, ChannelBuilder, Item, ItemBuilder};

use crate::config::Config;
use crate::domain::FeedItem;
use crate::errors::FeedplusResult;
use crate::feed::{filter, renderer};
use crate::source::ActivitySource;

/// Walks the paginated activity listing, filters and renders posts, and
/// assembles the RSS channel. Items keep the order the API returned them in.
pub struct FeedBuilder<S: ActivitySource> {
    source: S,
}

impl<S: ActivitySource> FeedBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn build(&self, config: &Config) -> FeedplusResult<Channel> {
        let mut items: Vec<FeedItem> = Vec::new();
        let mut token: Option<String> = None;

        while items.len() < config.limit {
            let page = self.source.fetch_page(token)?;

            for raw in page.items {
                let post = raw.validate()?;
                if !filter::matches(&post, &config.hashtags) {
                    continue;
                }

                items.push(renderer::render(&post)?);
                if items.len() >= config.limit {
                    // Early exit: remaining posts on this page are skipped
                    // and no further page is requested.
                    return Ok(finalize(config, items));
                }
            }

            match page.next_page_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        Ok(finalize(config, items))
    }
}

fn finalize(config: &Config, items: Vec<FeedItem>) -> Channel {
    ChannelBuilder::default()
        .title(&config.title)
        .description(&config.title)
        .link(&config.url)
        .items(items.into_iter().map(to_rss_item).collect::<Vec<_>>())
        .build()
}

fn to_rss_item(item: FeedItem) -> Item {
    ItemBuilder::default()
        .title(item.title)
        .link(item.link)
        .description(item.description)
        .pub_date(item.pub_date)
        .author(item.author)
        .build()
}
