//! # licensedb - SPDX identifier normalisation and matching
//!
//! Real-world license strings are messy: `gpl3+`, `GPL-3.0+`, `asl20`,
//! `GPL-3.0-with-autoconf-exception`, `bsd`. This crate maps any such spelling
//! onto the canonical SPDX identifier, generates the truncated "glob" forms an
//! identifier is commonly abbreviated to, and decides whether two expressions
//! name the same license/exception set regardless of spelling.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        LicenseDb                           │
//! │  ┌──────────────┐   ┌──────────────────────────────────┐   │
//! │  │LicenseSource │──▶│ Registry (built once, immutable)  │   │
//! │  │ dir / memory │   │  forms → Canonical                │   │
//! │  └──────────────┘   │  globs → {Canonical}              │   │
//! │                     └───────────────┬──────────────────┘   │
//! │                                     │                      │
//! │  ┌──────────────────────────────────▼───────────────────┐  │
//! │  │ Tokenizer → Short forms │ Matcher │ Glob resolver     │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is built exactly once from the identifier list of a
//! [`LicenseSource`]; every query afterwards is a pure read.

pub mod config;
pub mod db;
pub mod expression;
pub mod registry;
pub mod source;

// Re-exports for convenience
pub use config::LicenseDbConfig;
pub use db::{Extraction, LicenseDb, LicenseFile, LicenseFiles};
pub use expression::Keyword;
pub use registry::Registry;
pub use source::{DirSource, LicenseSource, MemorySource};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LicenseDbError {
    #[error("License data directory not configured")]
    MissingDataDir,

    #[error("License source lists no identifiers: {0}")]
    EmptySource(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type LicenseDbResult<T> = Result<T, LicenseDbError>;
