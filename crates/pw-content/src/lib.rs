//! ProjectWizard content
//!
//! Turns a topic + field of study into an academic project outline:
//! - [`ProjectRequest`]: validated input
//! - [`Category`] / [`ProjectTemplate`]: static catalog with default fallback
//! - [`ProjectOutline`]: personalised title/abstract plus copied lists
//! - [`Generator`]: the lookup wrapped in a simulated processing delay
//!
//! # Example
//!
//! ```rust,ignore
//! use pw_content::{Generator, ProjectRequest};
//!
//! let request = ProjectRequest::new("Smart irrigation for smallholders", "engineering")?;
//! let outline = Generator::default().generate(&request).await;
//! println!("{}", outline.render_text());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod generator;
mod outline;
mod request;

// Re-exports
pub use catalog::{template_for, Category, ProjectTemplate};
pub use error::ValidationError;
pub use generator::{Generator, DEFAULT_DELAY};
pub use outline::ProjectOutline;
pub use request::{ProjectRequest, MIN_TOPIC_CHARS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
