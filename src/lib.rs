//! Rubylens - client for a remote Ruby structure-analysis service.
//!
//! Rubylens holds no parsing or analysis logic of its own. It submits Ruby
//! source code to an external analysis service over HTTP and renders the
//! returned structural summary: classes, methods, variables, calls, and
//! conditionals.
//!
//! # Architecture
//!
//! - `model`: wire-format data model for analysis results
//! - `client`: HTTP client and response-envelope decoding
//! - `session`: request lifecycle state machine (Idle/Loading/Succeeded/Failed)
//! - `render`: output formatting (pretty, JSON)
//! - `config`: optional YAML configuration
//! - `cli`: command-line surface

pub mod cli;
pub mod client;
pub mod config;
pub mod model;
pub mod render;
pub mod session;

pub use client::{AnalyzeError, AnalyzerClient};
pub use config::Config;
pub use model::{AnalysisResult, ClassInfo, MethodInfo};
pub use session::{RequestState, Session};
