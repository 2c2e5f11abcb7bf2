mod get_feed;

pub use get_feed::*;
