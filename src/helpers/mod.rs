//! Helper functions shared by the parser, the generator and template filters

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
