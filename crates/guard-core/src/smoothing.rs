//! Score smoothing over textual perturbations.
//!
//! Single-pass keyword matching is brittle to superficial paraphrase.
//! Scoring a few lightly perturbed copies of the prompt and blending the
//! results reduces variance and surfaces signals that only fire on some
//! phrasings (the SmoothLLM idea, applied to heuristic scoring).
//! Perturbed variants are internal only; the user never sees them.

use crate::signals::RiskSignals;

/// Suffixes appended to the prompt to produce perturbed variants.
const PERTURBATION_SUFFIXES: &[&str] = &[
    " (malicious tone removed)",
    " (explain safely)",
    " (academic inquiry)",
];

/// Build the variant list: the original prompt followed by up to
/// `samples - 1` suffixed copies. No more variants than suffixes exist.
pub(crate) fn perturbations(prompt: &str, samples: usize) -> Vec<String> {
    let mut variants = vec![prompt.to_string()];
    for suffix in PERTURBATION_SUFFIXES
        .iter()
        .take(samples.saturating_sub(1))
    {
        variants.push(format!("{prompt}{suffix}"));
    }
    variants
}

/// Score every variant and blend into one score plus a deduplicated,
/// insertion-ordered reason list. The blend weights the worst variant
/// over the average (`0.6 * max + 0.4 * avg`), clamped to 1.0.
pub(crate) fn smoothed_score(
    signals: &RiskSignals,
    prompt: &str,
    samples: usize,
) -> (f64, Vec<String>) {
    let variants = perturbations(prompt, samples);
    let mut scores = Vec::with_capacity(variants.len());
    let mut reasons: Vec<String> = Vec::new();

    for variant in &variants {
        let (score, variant_reasons) = signals.score_one(variant);
        scores.push(score);
        reasons.extend(variant_reasons);
    }

    let avg = scores.iter().sum::<f64>() / scores.len().max(1) as f64;
    let max = scores.iter().copied().fold(0.0, f64::max);
    let blended = 0.6 * max + 0.4 * avg;

    (blended.min(1.0), dedupe_reasons(reasons))
}

/// Deduplicate by exact string equality, preserving first occurrence.
fn dedupe_reasons(reasons: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    reasons
        .into_iter()
        .filter(|reason| seen.insert(reason.clone()))
        .collect()
}
