//! Typed client for the Scoro REST API.
//!
//! Every call is a JSON `POST` to `https://{company}.scoro.com/api/v1/{entity}/{action}`
//! carrying the credentials in the body; every answer is wrapped in an
//! envelope whose `status` decides between the `data` payload and an error.
//!
//! ```rust,no_run
//! use scoro::{Credentials, HttpClient, Scoro};
//! use scoro::models::Product;
//! use scoro::types::{Bool, LocalizedString, DEFAULT_LANG};
//! use std::sync::Arc;
//!
//! # async fn run() -> scoro::Result<()> {
//! let transport = Arc::new(HttpClient::with_client(rquest::Client::new()));
//! let scoro = Scoro::new(Credentials::new("api-key", "company"), transport);
//!
//! let product = scoro
//!     .products()
//!     .modify(&Product {
//!         code: Some("435345".to_string()),
//!         names: LocalizedString::single("Example product", DEFAULT_LANG),
//!         is_active: Bool(true),
//!         ..Product::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod request;
pub mod services;
pub mod types;

pub use clients::{HttpClient, Transport};
pub use crate::config::Settings;
pub use credentials::Credentials;
pub use envelope::Action;
pub use error::{Error, Result};
pub use crate::http::{HttpRequest, HttpResponse};
pub use request::{DeleteStyle, Request};
pub use services::{Endpoint, EntityApi, Scoro};
