mod publish_profile;
mod toggle_favorite;

pub use publish_profile::*;
pub use toggle_favorite::*;
