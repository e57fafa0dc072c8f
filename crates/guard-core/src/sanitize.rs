//! Prompt sanitization.
//!
//! Best-effort cosmetic strip of known bypass phrases before a prompt is
//! handed to the responder. This is not a security boundary: blocking
//! decisions are made on the raw prompt, never on the sanitized text.

/// Literal bypass phrases removed from the case-folded prompt.
const BYPASS_REPLACEMENTS: &[&str] = &[
    "ignore previous instructions",
    "no safety",
    "uncensored",
    "jailbreak",
];

/// Case-fold the prompt, strip the known bypass phrases, trim, and
/// capitalize the first character. Idempotent.
pub fn sanitize(prompt: &str) -> String {
    let mut sanitized = prompt.to_lowercase();
    for phrase in BYPASS_REPLACEMENTS {
        sanitized = sanitized.replace(phrase, "");
    }
    capitalize(sanitized.trim())
}

/// Titlecase the first character, leaving the rest untouched.
///
/// Some characters uppercase to several letters (`ß` becomes `SS`); only
/// the first letter of that expansion stays uppercase, so capitalizing an
/// already-capitalized string is a no-op.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            let mut out = String::with_capacity(text.len());
            if let Some(head) = upper.next() {
                out.push(head);
            }
            for ch in upper {
                out.extend(ch.to_lowercase());
            }
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
