//! Decision types for analysis results.

use serde::{Deserialize, Serialize};

/// The three-way decision produced for every analyzed prompt.
///
/// - `Allow`: prompt is forwarded to the responder.
/// - `Monitor`: prompt is paused for review; the responder is bypassed,
///   but the refusal is phrased as a soft pause rather than a rejection.
/// - `Block`: prompt is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Prompt passed; safe to answer.
    Allow,
    /// Prompt paused for review.
    Monitor,
    /// Prompt rejected.
    #[serde(rename = "blocked")]
    Block,
}

impl Decision {
    /// Returns true if this is an Allow decision.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns true if this is a Monitor decision.
    pub fn is_monitored(&self) -> bool {
        matches!(self, Self::Monitor)
    }

    /// Returns true if this is a Block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Monitor => write!(f, "monitor"),
            Self::Block => write!(f, "blocked"),
        }
    }
}

/// Immutable record of one `analyze` call.
///
/// Every field is populated exactly once; the engine keeps no state
/// between calls and the caller owns the result outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Original input, unmodified.
    pub prompt: String,

    /// Final risk score, clamped to `[0.0, 1.0]`.
    pub risk_score: f64,

    /// The three-way decision label.
    pub decision: Decision,

    /// Deduplicated, insertion-ordered explanations. May be empty.
    pub reasons: Vec<String>,

    /// Prompt with known bypass phrases removed and case-folded.
    pub sanitized_prompt: String,

    /// Final user-facing text: either a refusal/monitor notice or the
    /// responder's answer to the sanitized prompt.
    pub responded_text: String,

    /// True for both `Monitor` and `Block`; both bypass the responder.
    pub blocked: bool,
}
