//! Async client for the RAE dictionary service.
//!
//! Every lookup is two round trips to the same URL: a GET that returns a
//! JavaScript challenge and a hidden form, then a POST of the solved form
//! that returns the definitions.
//!
//! ```no_run
//! use rae_client::{ClientConfig, Dictionary, RaeClient};
//!
//! # async fn run() -> Result<(), rae_model::RaeError> {
//! let client = RaeClient::new(ClientConfig::default())?;
//! let result = client.search("haber").await?;
//! for entry in result.entries() {
//!     println!("{} {:?}", entry.text, entry.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod protocol;
pub mod transport;

pub use client::{Dictionary, RaeClient};
pub use config::ClientConfig;
pub use protocol::Retriever;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
