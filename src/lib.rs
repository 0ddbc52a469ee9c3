//! # mm2calc
//!
//! Command-line and web front ends for the M/M/2 queue calculator in
//! [`mm2_core`].
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         mm2calc                          │
//! │  ┌──────────┐   calc    ┌──────────┐    ┌─────────────┐  │
//! │  │   CLI    │──────────▶│ mm2-core │───▶│   report    │  │
//! │  │  (clap)  │           └──────────┘    │ (text/json) │  │
//! │  └────┬─────┘                ▲          └─────────────┘  │
//! │       │ serve                │                           │
//! │       ▼                      │                           │
//! │  ┌──────────┐          ┌─────┴────┐                      │
//! │  │ settings │─────────▶│ mm2-web  │◀── HTTP form posts   │
//! │  │ (config) │          │ (hyper)  │                      │
//! │  └──────────┘          └──────────┘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`settings`]**: layered configuration for the web server
//! - **[`report`]**: plain-text and JSON renderings of a calculation
//! - **[`logging`]**: `tracing` subscriber setup
//!
//! ## Usage
//!
//! ```bash
//! # Print the worked derivation
//! mm2calc calc 2 3
//!
//! # Same, as JSON
//! mm2calc calc 2 3 --json
//!
//! # Serve the web form on port 5000 (or $PORT)
//! mm2calc serve
//! ```
//!
//! ### As a library
//!
//! ```
//! use mm2calc::report::render_text;
//!
//! let calc = mm2_core::compute(2.0, 3.0).unwrap();
//! assert!(render_text(&calc).contains("W = 12"));
//! ```

pub mod logging;
pub mod report;
pub mod settings;

pub use settings::Settings;
