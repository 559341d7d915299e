//! Wire types exchanged with the analysis service

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reply style. The lowercase identifier is what the service uses as a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Persuasive,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Friendly, Tone::Persuasive];

    /// Identifier used in the service response (`replies.<id>`)
    pub fn id(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Friendly => "friendly",
            Self::Persuasive => "persuasive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Formal => "Formal",
            Self::Friendly => "Friendly",
            Self::Persuasive => "Persuasive",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Formal => Self::Friendly,
            Self::Friendly => Self::Persuasive,
            Self::Persuasive => Self::Formal,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.id().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Successful response of the analyze endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Server-defined category label (Inquiry, Complaint, Offer, Information, ...)
    pub intent: String,
    #[serde(default)]
    pub intent_explanation: String,
    /// Generated replies keyed by tone identifier
    #[serde(default)]
    pub replies: HashMap<String, String>,
}

impl AnalysisResult {
    /// Reply for a tone, if the service produced one
    pub fn reply(&self, tone: Tone) -> Option<&str> {
        self.replies.get(tone.id()).map(String::as_str)
    }
}

#[derive(Serialize)]
pub(crate) struct AnalyzeRequest<'a> {
    pub email_text: &'a str,
}

/// Error payload; any other shape is treated as "no message"
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Identifies one submit so that late completions can be recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
