//! CyberGuard CLI - demo front-end for the jailbreak defense engine.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cyberguard_core::{GuardConfig, JailbreakGuard, SafeResponder};
use cyberguard_corpus::PromptCorpus;

#[derive(Parser)]
#[command(name = "cyberguard")]
#[command(about = "CyberGuard - heuristic jailbreak defense for cyber-security prompts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Analyze a single prompt
    Analyze {
        /// The prompt to analyze
        prompt: String,

        /// Risk score required to block
        #[arg(long, default_value_t = 0.55)]
        block_threshold: f64,

        /// Risk score required to monitor/refuse
        #[arg(long, default_value_t = 0.4)]
        monitor_threshold: f64,

        /// Emit the full decision record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate the engine over an attack/benign corpus
    Eval {
        /// Path to a JSON corpus; defaults to the built-in sample set
        #[arg(short, long)]
        corpus: Option<String>,

        /// Risk score required to block
        #[arg(long, default_value_t = 0.55)]
        block_threshold: f64,

        /// Risk score required to monitor/refuse
        #[arg(long, default_value_t = 0.4)]
        monitor_threshold: f64,
    },
}

fn build_guard(
    block_threshold: f64,
    monitor_threshold: f64,
) -> anyhow::Result<JailbreakGuard<SafeResponder>> {
    let config = GuardConfig {
        block_threshold,
        monitor_threshold,
        ..GuardConfig::default()
    };
    JailbreakGuard::new(SafeResponder::new(), config).context("failed to build guard engine")
}

fn analyze_single(guard: &JailbreakGuard<SafeResponder>, prompt: &str, json: bool) -> anyhow::Result<()> {
    let result = guard.analyze(prompt);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("=== Single prompt analysis ===");
    println!("Prompt:     {prompt}");
    println!("Risk score: {:.2} | decision: {}", result.risk_score, result.decision);
    let reasons = result
        .reasons
        .iter()
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");
    println!(
        "Reasons:    {}",
        if reasons.is_empty() { "none" } else { reasons.as_str() }
    );
    println!("Response:   {}", result.responded_text);
    Ok(())
}

fn run_eval(guard: &JailbreakGuard<SafeResponder>, corpus: &PromptCorpus) {
    println!("=== Defense evaluation (cyber jailbreak focus) ===");
    let mut category_asrs = Vec::new();

    for category in &corpus.attacks {
        let results: Vec<_> = category.prompts.iter().map(|p| guard.analyze(p)).collect();
        let blocked = results.iter().filter(|r| r.blocked).count();
        let asr = 1.0 - blocked as f64 / results.len().max(1) as f64;
        category_asrs.push(asr);

        println!(
            "[{}] blocked {}/{} | ASR={:.2}",
            category.name,
            blocked,
            results.len(),
            asr
        );
        if let Some(sample) = results.first() {
            let reasons: Vec<_> = sample.reasons.iter().take(2).collect();
            println!("  sample reasons: {reasons:?}");
            println!("  sample reply:   {}...", truncate(&sample.responded_text, 120));
        }
    }

    let benign_results: Vec<_> = corpus.benign.iter().map(|p| guard.analyze(p)).collect();
    let false_positives = benign_results.iter().filter(|r| r.blocked).count();
    let fpr = false_positives as f64 / benign_results.len().max(1) as f64;
    println!(
        "\nBenign prompts blocked: {}/{} FPR={:.2}",
        false_positives,
        benign_results.len(),
        fpr
    );

    let avg_asr = category_asrs.iter().sum::<f64>() / category_asrs.len().max(1) as f64;
    println!("\nOverall attack success rate (lower is better): {avg_asr:.2}");
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match cli.command {
        Some(Commands::Analyze {
            prompt,
            block_threshold,
            monitor_threshold,
            json,
        }) => {
            let guard = build_guard(block_threshold, monitor_threshold)?;
            analyze_single(&guard, &prompt, json)?;
        }
        Some(Commands::Eval {
            corpus,
            block_threshold,
            monitor_threshold,
        }) => {
            let guard = build_guard(block_threshold, monitor_threshold)?;
            let corpus = match corpus {
                Some(path) => PromptCorpus::from_json_file(&path)
                    .with_context(|| format!("failed to load corpus from {path}"))?,
                None => PromptCorpus::builtin(),
            };
            run_eval(&guard, &corpus);
        }
        None => {
            println!("CyberGuard - heuristic jailbreak defense. Use --help for commands.");
            println!("Try: cyberguard analyze \"<your prompt>\"");
        }
    }

    Ok(())
}
