pub mod item;
pub mod post;

pub use item::FeedItem;
pub use post::{Attachment, FullImage, Page, Post, RawActor, RawObject, RawPost};
