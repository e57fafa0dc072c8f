//! User-facing response construction.

use crate::decision::Decision;
use crate::responder::Responder;

/// Compose the final reply text.
///
/// Monitor and Block decisions never reach the responder; they return a
/// templated notice quoting at most `max_quoted_reasons` reasons. Allow
/// delegates to the responder with the sanitized prompt, falling back to
/// the original when sanitization left nothing behind.
pub(crate) fn build_response<R: Responder>(
    responder: &R,
    prompt: &str,
    sanitized: &str,
    decision: Decision,
    reasons: &[String],
    max_quoted_reasons: usize,
) -> String {
    match decision {
        Decision::Monitor => format!(
            "Request paused for review: {}. Provide benign context to continue.",
            reason_snippet(reasons, max_quoted_reasons)
        ),
        Decision::Block => format!(
            "Rejected unsafe request ({}). I can only discuss defensive or preventive measures.",
            reason_snippet(reasons, max_quoted_reasons)
        ),
        Decision::Allow => {
            let text = if sanitized.is_empty() { prompt } else { sanitized };
            responder.respond(text)
        }
    }
}

fn reason_snippet(reasons: &[String], max_quoted_reasons: usize) -> String {
    if reasons.is_empty() {
        "high-risk content".to_string()
    } else {
        reasons[..reasons.len().min(max_quoted_reasons)].join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::SafeResponder;

    fn reasons(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("reason {i}")).collect()
    }

    #[test]
    fn test_monitor_template() {
        let text = build_response(
            &SafeResponder::new(),
            "p",
            "P",
            Decision::Monitor,
            &reasons(2),
            3,
        );
        assert_eq!(
            text,
            "Request paused for review: reason 0; reason 1. Provide benign context to continue."
        );
    }

    #[test]
    fn test_block_template_caps_reasons() {
        let text = build_response(
            &SafeResponder::new(),
            "p",
            "P",
            Decision::Block,
            &reasons(5),
            3,
        );
        assert!(text.starts_with("Rejected unsafe request (reason 0; reason 1; reason 2)."));
        assert!(!text.contains("reason 3"));
    }

    #[test]
    fn test_block_without_reasons() {
        let text =
            build_response(&SafeResponder::new(), "p", "P", Decision::Block, &[], 3);
        assert!(text.contains("high-risk content"));
    }

    #[test]
    fn test_allow_uses_sanitized() {
        let responder = SafeResponder::new();
        let text = build_response(
            &responder,
            "original firewall question",
            "Sanitized ransomware question",
            Decision::Allow,
            &[],
            3,
        );
        // Tip keyed off the sanitized text, not the original.
        assert!(text.contains("offline backups"));
    }

    #[test]
    fn test_allow_falls_back_to_prompt() {
        let responder = SafeResponder::new();
        let text = build_response(
            &responder,
            "firewall question",
            "",
            Decision::Allow,
            &[],
            3,
        );
        assert!(text.contains("segment networks"));
    }
}
