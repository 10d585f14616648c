//! # Notelink Configuration
//!
//! Typed configuration for referrer search, mention excerpts and quick-link
//! search, with serde defaults for every field so partial TOML files load.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notelink_config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("notelink.toml").await?;
//!     println!("excerpt length: {}", config.referrers.note_mention_text_length);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod error;
mod loader;

pub use components::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
