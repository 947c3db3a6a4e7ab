//! Content module - reads content files and turns them into posts and projects

mod frontmatter;
pub mod loader;
mod post;
pub mod reader;

pub use frontmatter::FrontMatter;
pub use post::{Post, Project, TrustedHtml};
pub use reader::RawDocument;
