//! Content module - article model and loading from the source directory

mod article;
mod frontmatter;
pub mod loader;

pub use article::Article;
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
