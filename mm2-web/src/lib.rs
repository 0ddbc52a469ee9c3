//! # mm2-web
//!
//! A small HTTP front end for [`mm2_core`]: an input form for the two
//! intervals and a result page that walks through every derivation step.
//!
//! ## Routes
//!
//! | Method | Path                  | Response                                   |
//! |--------|-----------------------|--------------------------------------------|
//! | GET    | `/`                   | Input form                                 |
//! | POST   | `/`                   | Result page, or the form with an error     |
//! | GET    | `/health`, `/healthz` | `OK`                                       |
//!
//! Rejected submissions re-display the form with the submitted values, so
//! the user only has to correct the field that was wrong.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mm2_web::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mm2_web::WebError> {
//!     let config = ServerConfig::builder()
//!         .listen_addr("127.0.0.1:5000")
//!         .build();
//!
//!     mm2_web::start(config).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod server;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::WebError;
pub use form::{submit, FormFields, Submission};
pub use server::{serve, start};
