// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Analyse the page with the page_analyzer library
// 4. Print the report as a table or as JSON
// 5. Exit with proper code (0 = no broken links, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - async/await: the analysis fetches the page and probes links concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use page_analyzer::{Analyzer, PageReport};

// anyhow::Result lets us return any error type with the ? operator
use anyhow::{Context, Result};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err = the analysis itself failed
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_logger(cli.log_level.into()).context("could not initialise logging")?;

    let analyzer = Analyzer::new(cli.analyzer_config())?;
    let report = analyzer
        .report(&cli.url)
        .await
        .with_context(|| format!("analysis of {} failed", cli.url))?;

    print_report(&report, cli.json)?;

    if report.result.broken_links_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Prints the report either as a table or JSON
fn print_report(report: &PageReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

// Prints the report as a human-readable table in the terminal
fn print_table(report: &PageReport) {
    let result = &report.result;
    let title = if result.title.is_empty() { "(none)" } else { result.title.as_str() };
    let version = if result.html_version.is_empty() { "(no doctype)" } else { result.html_version.as_str() };

    println!("📄 {}", report.base_url);
    println!("{}", "=".repeat(60));
    println!("{:<30} {}", "HTML version", version);
    println!("{:<30} {}", "Title", title);
    println!("{:<30} {}", "h1 / h2 / h3 / h4", format!(
        "{} / {} / {} / {}",
        result.h1_count, result.h2_count, result.h3_count, result.h4_count
    ));
    println!("{:<30} {}", "Internal links", result.internal_links_count);
    println!("{:<30} {}", "External links", result.external_links_count);
    println!("{:<30} {}", "Broken links", result.broken_links_count);
    println!("{:<30} {}", "Login form", if result.has_login_form { "yes" } else { "no" });

    if report.unprobed_links > 0 {
        println!(
            "⏱️  {} external link(s) were not checked before the deadline",
            report.unprobed_links
        );
    }

    if !report.broken_links.is_empty() {
        println!();
        println!("{:<60} {:<30}", "BROKEN URL", "DETAILS");
        println!("{}", "=".repeat(90));

        for link in &report.broken_links {
            let details = match (link.status_code, &link.reason) {
                (Some(code), _) => format!("HTTP {}", code),
                (None, Some(reason)) => reason.clone(),
                (None, None) => String::new(),
            };

            // Truncate URL if too long for display
            let url_display = if link.url.chars().count() > 57 {
                format!("{}...", link.url.chars().take(57).collect::<String>())
            } else {
                link.url.clone()
            };

            println!("{:<60} {:<30}", url_display, details);
        }
    }
}
