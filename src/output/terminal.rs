// Colored terminal output for keyword previews, assessments and verdicts.
//
// main.rs delegates all display to these functions.

use colored::Colorize;

use crate::keywords::extractor::KeywordTable;
use crate::scoring::links::LinkLists;
use crate::scoring::traits::{Assessment, MAX_RATING};
use crate::scoring::verdict::{RiskLevel, Verdict};

/// Intro line printed above the keyword preview.
pub const KEYWORD_PREVIEW_INTRO: &str = "Top suspicious keywords:";

/// Show the first `limit` rows of a keyword table.
pub fn display_keyword_preview(table: &KeywordTable, limit: usize) {
    println!("\n{}", KEYWORD_PREVIEW_INTRO.bold());
    println!(
        "{}",
        format!(
            "  ({} of {} rows labeled suspicious, column '{}')",
            table.suspicious_rows, table.rows_scanned, table.text_column
        )
        .dimmed()
    );

    if table.is_empty() {
        println!("  No keywords found.");
        return;
    }

    println!("  {:>4}  {:<24} {:>8}", "#".dimmed(), "word".dimmed(), "count".dimmed());
    println!("  {}", "-".repeat(38).dimmed());
    for (i, entry) in table.entries.iter().take(limit).enumerate() {
        println!("  {:>4}. {:<24} {:>8}", i + 1, entry.word, entry.count);
    }

    if table.entries.len() > limit {
        println!(
            "  {}",
            format!("... {} more in the report", table.entries.len() - limit).dimmed()
        );
    }
}

/// Show a single signal's rating and reasons.
pub fn display_assessment(title: &str, assessment: &Assessment) {
    println!(
        "  {:<8} {}/{}",
        format!("{title}:").bold(),
        assessment.rating,
        MAX_RATING
    );
    for reason in &assessment.reasons {
        println!("           {}", super::truncate_chars(reason, 120).dimmed());
    }
}

/// Show the raw keyword score with its band.
pub fn display_text_score(raw: u32, assessment: &Assessment) {
    let level = RiskLevel::from_keyword_rating(assessment.rating);
    println!("\n{}", "=== Keyword Risk ===".bold());
    println!("  Raw score: {raw}");
    display_assessment("Rating", assessment);
    println!("  Risk level: {}", colorize_level(level));
}

/// Show the full verdict for a message.
pub fn display_verdict(verdict: &Verdict) {
    println!("\n{}", "=== Results ===".bold());
    for result in &verdict.signals {
        display_assessment(result.signal, &result.assessment);
    }
    println!();
    println!(
        "  Final risk: {:.2}  ({})",
        verdict.score,
        colorize_level(verdict.level)
    );
}

/// Show mined link lists.
pub fn display_link_lists(lists: &LinkLists) {
    let sections = [
        ("Trusted link domains", &lists.trusted),
        ("Untrusted link domains", &lists.untrusted),
        ("Fake/similar link domains", &lists.fake),
    ];
    for (title, domains) in sections {
        println!("\n{}", format!("=== {title} ({}) ===", domains.len()).bold());
        for (i, domain) in domains.iter().enumerate() {
            println!("  {:>2}. {domain}", i + 1);
        }
    }
}

/// Show mined sender domain tokens.
pub fn display_sender_tokens(tokens: &[String]) {
    println!("\n{}", "Most common suspicious tokens in addresses:".bold());
    if tokens.is_empty() {
        println!("  None found.");
        return;
    }
    for (i, token) in tokens.iter().enumerate() {
        println!("  {:>2}. {token}", i + 1);
    }
}

fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}
