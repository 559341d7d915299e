//! Email analysis service integration
//!
//! The service classifies the intent of an email and drafts replies in three
//! tones. This module owns everything that crosses that boundary:
//! - wire types and tone identifiers
//! - input validation performed before any request is made
//! - the HTTP client and the background actor that runs requests

mod actor;
mod client;
mod error;
mod types;
mod validate;

pub use actor::{AnalysisActorHandle, AnalysisCommand, AnalysisEvent, spawn_analysis_actor};
pub use client::{AnalysisClient, EmailAnalyzer};
pub use error::ServiceError;
pub use types::{AnalysisResult, RequestToken, Tone};
pub use validate::{ValidationError, validate_email_text};
