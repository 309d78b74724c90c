pub mod builder;
pub mod filter;
pub mod renderer;

pub use builder::FeedBuilder;
