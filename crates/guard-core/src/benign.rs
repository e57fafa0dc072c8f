//! Benign-intent adjustment.
//!
//! Defensive framing ("how do I protect", "blue team", "hardening") earns
//! a downward score correction so that protective questions about risky
//! topics are not refused. The adjustment is only ever subtracted, and is
//! capped so that it can never launder a strongly malicious prompt.

/// Protective-framing cues scanned case-insensitively.
const BENIGN_CUES: &[&str] = &[
    "how do i protect",
    "defend against",
    "mitigate",
    "educational",
    "for a report",
    "security awareness",
    "detection rules",
    "blue team",
    "hardening",
    "remediation",
    "secure configuration",
];

/// Downward correction in `[0.0, 0.25]`: 0.05 per matched cue, capped.
pub(crate) fn benign_adjustment(prompt: &str) -> f64 {
    let lowered = prompt.to_lowercase();
    let hits = BENIGN_CUES
        .iter()
        .filter(|cue| lowered.contains(*cue))
        .count();
    (0.05 * hits as f64).min(0.25)
}
