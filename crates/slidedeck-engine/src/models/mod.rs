pub mod deck;
pub mod frontmatter;
pub mod slide;

pub use deck::*;
pub use frontmatter::*;
pub use slide::*;
