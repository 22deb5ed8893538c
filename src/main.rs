use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use phishscan::config::Config;
use phishscan::output::terminal;
use phishscan::pipeline;
use phishscan::scoring::domain::{DomainScorer, MINED_TOKEN_COUNT};
use phishscan::scoring::text::TextScorer;
use phishscan::scoring::traits::{EmailMessage, RiskSignal};

/// phishscan: suspicious keyword mining and phishing risk scoring.
///
/// Mines the vocabulary of labeled phishing mail and rates individual
/// messages with simple, explainable heuristics.
#[derive(Parser)]
#[command(name = "phishscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the words of suspicious (label = 1) emails and write them to CSV
    Keywords {
        /// Labeled dataset (CSV, TSV or spreadsheet)
        input: PathBuf,

        /// Report path (default: suspicious_keywords.csv)
        output: Option<PathBuf>,
    },

    /// Keyword risk score for a subject and body
    Score {
        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        body: String,
    },

    /// Rate a sender address by its domain
    Domain {
        /// Sender email address (e.g. support@paypa1.com)
        sender: String,
    },

    /// Combined domain, text and link verdict for one message
    Check {
        #[arg(long)]
        sender: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        body: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most common domain tokens in a list of suspicious senders
    Senders {
        /// Table of sender addresses
        input: PathBuf,

        /// Column holding the addresses (default: first column)
        #[arg(long)]
        column: Option<String>,

        /// Number of tokens to show (default: 20)
        #[arg(long, default_value_t = MINED_TOKEN_COUNT)]
        top: usize,
    },

    /// Mine trusted, untrusted and look-alike link domains from a labeled dataset
    Links {
        /// Dataset with label, urls and body columns
        input: PathBuf,

        /// Rows to analyze (default: PHISHSCAN_LINK_ROWS or 4000)
        #[arg(long)]
        rows: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("phishscan=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Keywords { input, output } => {
            let output = output.unwrap_or_else(|| config.output_path.clone());
            info!(input = %input.display(), output = %output.display(), "Extracting keywords");

            let table = pipeline::keywords::run(&input, &output)
                .with_context(|| format!("Keyword extraction failed for {}", input.display()))?;

            terminal::display_keyword_preview(&table, config.preview_rows);
            println!(
                "\n{}",
                format!("Keyword report saved to: {}", output.display()).bold()
            );
        }

        Commands::Score { subject, body } => {
            let scorer = TextScorer::new(config.lexicon.clone());
            let raw = scorer.score(&subject, &body);
            let email = EmailMessage {
                sender: String::new(),
                subject,
                body,
            };
            terminal::display_text_score(raw, &scorer.assess(&email));
        }

        Commands::Domain { sender } => {
            let suspicious_tokens =
                pipeline::check::sender_tokens_or_empty(config.sender_list.as_deref());
            let scorer = DomainScorer::new(config.trusted_domains.clone(), suspicious_tokens);
            let assessment = scorer.assess_sender(&sender);

            println!("\n{}", format!("=== Sender: {sender} ===").bold());
            terminal::display_assessment("Domain", &assessment);
        }

        Commands::Check {
            sender,
            subject,
            body,
            json,
        } => {
            if sender.trim().is_empty() || subject.trim().is_empty() || body.trim().is_empty() {
                anyhow::bail!("Fill in sender, subject, and body.");
            }

            let signals = pipeline::check::Signals::from_config(&config);
            let verdict = signals.evaluate(&EmailMessage {
                sender,
                subject,
                body,
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
            } else {
                terminal::display_verdict(&verdict);
            }
        }

        Commands::Senders { input, column, top } => {
            let tokens = pipeline::check::mine_sender_tokens(&input, column.as_deref(), top)
                .with_context(|| format!("Could not mine sender tokens from {}", input.display()))?;
            terminal::display_sender_tokens(&tokens);
        }

        Commands::Links { input, rows } => {
            let rows = rows.unwrap_or(config.link_rows);
            let lists = pipeline::check::load_link_lists(&input, rows)
                .with_context(|| format!("Could not mine link lists from {}", input.display()))?;
            terminal::display_link_lists(&lists);
        }
    }

    Ok(())
}
