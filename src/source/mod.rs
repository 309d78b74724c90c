pub mod activities;
pub mod traits;

pub use activities::ActivitiesClient;
pub use traits::ActivitySource;
