//! Configuration module

mod site;

pub use site::Limits;
pub use site::SiteConfig;
pub use site::{FEATURED_PROJECTS, RECENT_POSTS};
