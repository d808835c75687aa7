#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod content;
pub mod filename;
pub mod frontmatter;
mod fs;
pub mod model;
pub mod repository;
pub mod router;
pub mod sitemap;
pub mod stage;
pub mod watch;

pub use config::Config;
pub use content::Content;
pub use stage::Stage;
