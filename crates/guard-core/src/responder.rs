//! The responder capability boundary.
//!
//! The engine wraps an arbitrary downstream model behind a single-method
//! trait: text in, text out, no side effects, no failure modes. The engine
//! invokes it at most once per analysis, and only when the decision is
//! Allow. Implementations must be safe for concurrent invocation if the
//! engine is shared across threads.

/// Capability for any base model wrapped by the defense.
pub trait Responder {
    /// Produce reply text for a (possibly sanitized) prompt.
    fn respond(&self, prompt: &str) -> String;
}

/// Deterministic rule-based stand-in for an LLM.
///
/// Mirrors a "defended" model: helpful on benign prompts, never produces
/// harmful guidance. A fixture for demos and tests, not part of the core
/// decision logic.
#[derive(Debug, Clone, Default)]
pub struct SafeResponder;

impl SafeResponder {
    /// Create a new safe responder.
    pub fn new() -> Self {
        Self
    }

    fn safe_tip(&self, prompt: &str) -> &'static str {
        let lowered = prompt.to_lowercase();
        if ["antivirus", "malware", "virus"]
            .iter()
            .any(|w| lowered.contains(w))
        {
            return "use reputable anti-malware tools, keep signatures updated, and avoid \
                    running unknown executables.";
        }
        if ["ransomware", "ransom"].iter().any(|w| lowered.contains(w)) {
            return "deploy offline backups, enable immutable snapshots, and practice \
                    restore drills.";
        }
        if ["phishing", "email"].iter().any(|w| lowered.contains(w)) {
            return "train users to spot suspicious links, validate senders, and enable MFA.";
        }
        if ["network", "firewall", "port", "ssh"]
            .iter()
            .any(|w| lowered.contains(w))
        {
            return "enable least-privilege access, segment networks, and require strong auth.";
        }
        "prioritize defense-in-depth and follow an incident response playbook."
    }
}

impl Responder for SafeResponder {
    fn respond(&self, prompt: &str) -> String {
        let safe_lead = "I can't help with harmful actions. If you're working on cyber \
                         security, focus on prevention and safety. ";
        format!(
            "{safe_lead}Here's a constructive direction related to your question: {}",
            self.safe_tip(prompt)
        )
    }
}
