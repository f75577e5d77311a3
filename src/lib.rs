//! Client library for the blocked file extension service.
//!
//! This crate wraps the service's `/api/extensions` resource in four async
//! operations:
//! - list the current blocklist state
//! - toggle a fixed (built-in) extension
//! - add a custom extension
//! - delete a custom extension
//!
//! The client is a facade over `reqwest`: one request per call, no retries,
//! no caching, no authentication. Transport and server failures propagate to
//! the caller through [`Error`] untranslated.
//!
//! # Example
//! ```ignore
//! use extblock::{ClientConfig, ExtensionClient};
//!
//! let client = ExtensionClient::new(ClientConfig::default());
//!
//! client.add_custom("svg").await?;
//! client.toggle_fixed("exe").await?;
//!
//! let list = client.get_all().await?;
//! println!("{} of {} custom slots used", list.custom_count, list.max_custom_count);
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{ClientConfig, ExtensionClient};
pub use error::{Error, Result};
pub use types::{AddCustomRequest, CustomExtension, ErrorBody, ExtensionList, FixedExtension};
