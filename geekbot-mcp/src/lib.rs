//! # geekbot-mcp
//!
//! Model Context Protocol tools for reading Geekbot standups and reports.
//!
//! ## Features
//!
//! - **API Client**: Scoped-session access to the Geekbot v1 REST API
//! - **Data Model**: Typed standups, polls, reports and their participants
//! - **Template Engine**: Liquid-based rendering into LLM-friendly text
//! - **MCP Support**: `fetch_standups` / `fetch_reports` tools and a rollup prompt
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geekbot_mcp::{api::GeekbotApi, models::standup_from_json, template::render_standups};
//!
//! # async fn run() -> geekbot_mcp::Result<()> {
//! let api = GeekbotApi::new("my-api-key");
//! let session = api.open()?;
//! let raw = session.get_standups().await?;
//! session.close();
//!
//! let standups = raw
//!     .iter()
//!     .map(standup_from_json)
//!     .collect::<geekbot_mcp::Result<Vec<_>>>()?;
//! println!("{}", render_standups(&standups)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Environment-driven configuration
pub mod config;

/// Shared helpers
pub mod common;

/// Geekbot HTTP API client
pub mod api;

/// Standup, poll and report data model
pub mod models;

/// Template engine and rendering
pub mod template;

/// Static prompt templates served to MCP clients
pub mod prompts;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use api::{GeekbotApi, GeekbotSession, ReportQuery};
pub use config::{Config, ConfigError};
pub use models::{Poll, Question, Report, Reporter, Standup, User};
pub use template::{Template, TemplateEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Main error type for the library
    #[derive(Debug, Error)]
    pub enum GeekbotError {
        /// Invalid or missing configuration
        #[error("Configuration error: {0}")]
        Config(#[from] crate::config::ConfigError),

        /// The Geekbot API answered with a non-success status
        #[error("Geekbot API returned HTTP {status}: {body}")]
        Upstream {
            /// HTTP status code
            status: u16,
            /// Response body as returned by the API
            body: String,
        },

        /// The Geekbot API answered with JSON that does not match the expected shape
        #[error("Malformed {entity} in Geekbot response: {message}")]
        MalformedResponse {
            /// Entity being decoded (standup, report, ...)
            entity: &'static str,
            /// Decoder message, naming the offending field
            message: String,
        },

        /// Caller supplied an argument that could not be interpreted
        #[error("Invalid argument: {0}")]
        InvalidArgument(String),

        /// Transport failure talking to the API
        #[error("HTTP error: {0}")]
        Http(#[from] reqwest::Error),

        /// Template parsing or rendering failed
        #[error("Template error: {0}")]
        Template(String),
    }

    impl GeekbotError {
        /// Build a [`GeekbotError::MalformedResponse`] for the given entity
        pub fn malformed(entity: &'static str, message: impl Into<String>) -> Self {
            Self::MalformedResponse {
                entity,
                message: message.into(),
            }
        }
    }

    /// Result type alias
    pub type Result<T> = std::result::Result<T, GeekbotError>;
}

pub use error::{GeekbotError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Config, GeekbotApi, GeekbotError, GeekbotSession, Poll, Question, Report, ReportQuery,
        Reporter, Result, Standup, Template, TemplateEngine, User,
    };

    pub use crate::mcp::McpServer;
}
