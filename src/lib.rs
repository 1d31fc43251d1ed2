//! podgen: client for an AI podcast generation service.
//!
//! Collects podcast parameters into a [`types::FormState`], submits them to
//! the service through a [`controller::FormController`], and renders the
//! returned script and audio link as text.
//!
//! # Quick Start
//!
//! ```no_run
//! use podgen::prelude::*;
//!
//! # async fn example() -> podgen::error::Result<()> {
//! let config = PodgenConfig::from_env()?;
//! let client = HttpPodcastClient::new(config.clone())?;
//! let form = FormState::builder()
//!     .topic("The future of AI in healthcare")
//!     .host("Alex Rivera")
//!     .guests_text("Dr. Kim, Jordan Lee")
//!     .build();
//!
//! let mut controller = FormController::new(client).with_form(form);
//! controller.submit().await;
//! if let Some(out) = podgen::render::render_outcome(&controller.view(), &config) {
//!     println!("{out}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod prelude;
pub mod render;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
