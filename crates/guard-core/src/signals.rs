//! Risk signal extraction.
//!
//! Pure lexical scoring of a single text: topic buckets, intent verbs,
//! guardrail-bypass cues, stealth cues, and obfuscation indicators each
//! contribute a bounded partial score plus a human-readable reason.
//!
//! The tables are ordered `(label, matcher)` data rather than hard-coded
//! branches, so new categories extend the tables without touching the
//! scoring control flow.

use regex::Regex;

use crate::error::GuardError;

/// A topic bucket: a named category and its literal trigger terms.
struct TopicCategory {
    name: &'static str,
    terms: &'static [&'static str],
}

const TOPIC_TABLE: &[TopicCategory] = &[
    TopicCategory {
        name: "malware/antivirus",
        terms: &[
            "disable antivirus",
            "bypass antivirus",
            "bypass av",
            "malware",
            "payload",
            "defender",
            "edr",
        ],
    },
    TopicCategory {
        name: "ransomware",
        terms: &["ransomware", "encrypt", "decrypt", "locker", "polymorphic"],
    },
    TopicCategory {
        name: "network exploitation",
        terms: &[
            "nmap",
            "port scan",
            "exploit",
            "reverse shell",
            "buffer overflow",
            "exploit db",
        ],
    },
    TopicCategory {
        name: "credential abuse",
        terms: &[
            "credential",
            "hashcat",
            "bruteforce",
            "keylogger",
            "credential dump",
            "lsass",
        ],
    },
    TopicCategory {
        name: "llm guardrails bypass",
        terms: &[
            "ignore previous",
            "jailbreak",
            "uncensored",
            "ignore safety",
            "no filter",
        ],
    },
];

/// Verbs signalling offensive intent, matched as word stems
/// (`exploit` also matches `exploiting`).
const INTENT_VERBS: &[&str] = &[
    "bypass",
    "evade",
    "disable",
    "exploit",
    "weaponize",
    "attack",
    "compromise",
    "exfiltrate",
    "persist",
    "encrypt",
];

/// Literal cues lifted from in-the-wild jailbreak prompts (AIM, DAN-style
/// role play, formatting markers used to smuggle instructions).
const BYPASS_PHRASES: &[&str] = &[
    "as a joke",
    "roleplay",
    "pretend to be",
    "no safety",
    "always intelligent and machiavellian",
    "aim",
    "uncensored",
    "without detection",
    "stay in character",
    "###",
    "!",
    "::",
];

const STEALTH_CUES: &[&str] = &["hidden", "covert", "undetected", "stealth"];

/// Obfuscation/channel patterns matched against the *original-case* text.
const OBFUSCATION_TABLE: &[(&str, &str)] = &[
    (r"[A-Za-z0-9+/]{16,}={0,2}", "base64-like blob"),
    (r"0x[0-9a-f]{4,}", "hex payload"),
    (r"(?i)wget|curl|powershell", "download/execution intent"),
    (r"(?i)tor hidden service|\.onion", "covert channel"),
];

/// Compiled pattern tables for single-text risk scoring.
pub struct RiskSignals {
    intent_verbs: Vec<(&'static str, Regex)>,
    obfuscation: Vec<(Regex, &'static str)>,
}

impl RiskSignals {
    /// Compile the static pattern tables.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Pattern`] if a table entry fails to compile;
    /// this is a programmer error in the tables, not an input condition.
    pub fn new() -> Result<Self, GuardError> {
        let intent_verbs = INTENT_VERBS
            .iter()
            .map(|verb| Ok((*verb, Regex::new(&format!(r"\b{verb}\w*\b"))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let obfuscation = OBFUSCATION_TABLE
            .iter()
            .map(|(pattern, label)| Ok((Regex::new(pattern)?, *label)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            intent_verbs,
            obfuscation,
        })
    }

    /// Score a single text, returning a partial risk score and the ordered
    /// list of reasons (not yet deduplicated).
    ///
    /// The score is capped at 1.2 rather than 1.0 so that a text stacking
    /// many strong signals still dominates the smoothing blend; the final
    /// clamp to `[0.0, 1.0]` happens after blending.
    pub fn score_one(&self, text: &str) -> (f64, Vec<String>) {
        let lowered = text.to_lowercase();
        let mut reasons: Vec<String> = Vec::new();
        let mut score = 0.0;

        let mut matched_categories = 0usize;
        for category in TOPIC_TABLE {
            let hit_count = category
                .terms
                .iter()
                .filter(|term| lowered.contains(*term))
                .count();
            if hit_count > 0 {
                matched_categories += 1;
                score += 0.18 + 0.06 * hit_count as f64;
                reasons.push(format!(
                    "cyber topic match: {} ({} signals)",
                    category.name, hit_count
                ));
            }
        }

        if lowered.contains("keylogger") {
            score += 0.08;
            reasons.push("explicit keylogger request".to_string());
        }

        let mut verb_hits: Vec<&str> = self
            .intent_verbs
            .iter()
            .filter(|(_, re)| re.is_match(&lowered))
            .map(|(verb, _)| *verb)
            .collect();
        if !verb_hits.is_empty() {
            score += 0.1 + 0.02 * verb_hits.len() as f64;
            verb_hits.sort_unstable();
            reasons.push(format!("malicious intent verbs: {}", verb_hits.join(", ")));
        }

        let mut bypass_hits: Vec<&str> = BYPASS_PHRASES
            .iter()
            .filter(|phrase| lowered.contains(*phrase))
            .copied()
            .collect();
        if !bypass_hits.is_empty() {
            score += 0.08 + 0.03 * bypass_hits.len() as f64;
            bypass_hits.sort_unstable();
            reasons.push(format!("guardrail bypass cues: {}", bypass_hits.join(", ")));
        }

        let mut stealth_hits: Vec<&str> = STEALTH_CUES
            .iter()
            .filter(|cue| lowered.contains(*cue))
            .copied()
            .collect();
        if !stealth_hits.is_empty() {
            score += 0.06 + 0.02 * stealth_hits.len() as f64;
            stealth_hits.sort_unstable();
            reasons.push(format!("stealth intent cues: {}", stealth_hits.join(", ")));
        }

        if matched_categories > 0 && !verb_hits.is_empty() {
            score += 0.1;
            reasons.push("topic + intent alignment (high-risk)".to_string());
        }

        // Obfuscation runs on the original casing: base64 blobs and hex
        // payloads lose their shape when lower-cased.
        for (re, label) in &self.obfuscation {
            if re.is_match(text) {
                score += 0.06;
                reasons.push(format!("obfuscation indicator: {label}"));
            }
        }

        if matched_categories >= 2 {
            score += 0.08;
            reasons.push("multiple high-risk categories in one prompt".to_string());
        }

        (score.min(1.2), reasons)
    }
}
