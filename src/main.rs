mod analysis;
mod app;
mod clipboard;
mod config;
mod constants;
mod input;
mod ui;

use anyhow::{Context, Result, bail};
use std::env;
use std::io::{self, Read, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::analysis::{AnalysisClient, AnalysisResult, Tone, validate_email_text};
use crate::app::App;
use crate::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sparkreply=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .and_then(|dir| std::fs::create_dir_all(&dir).ok().map(|_| dir))
        .map(|dir| dir.join("sparkreply.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"sparkreply - Turn a received email into ready-to-send replies

Usage: sparkreply [command]

Commands:
    (none)                        Start the interactive assistant
    analyze [FILE] [--tone TONE]  Analyze FILE (or stdin) and print the reply
                                  TONE is formal, friendly or persuasive
    check                         Check that the analysis service is reachable
    init                          Write a default configuration file
    help                          Show this help message

Configuration file: ~/.config/sparkreply/config.toml
Environment: SPARKREPLY_SERVICE_URL overrides service.base_url
"#
    );
}

/// Arguments of the `analyze` subcommand
#[derive(Debug, Default, PartialEq, Eq)]
struct AnalyzeArgs {
    /// None or "-" reads stdin
    file: Option<String>,
    tone: Tone,
}

fn parse_analyze_args(args: &[String]) -> Result<AnalyzeArgs> {
    let mut parsed = AnalyzeArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let tone_value = if arg == "--tone" {
            Some(iter.next().context("--tone needs a value")?.as_str())
        } else {
            arg.strip_prefix("--tone=")
        };

        if let Some(value) = tone_value {
            parsed.tone = Tone::parse(value).with_context(|| {
                format!("Unknown tone '{}' (use formal, friendly or persuasive)", value)
            })?;
        } else if parsed.file.is_none() {
            parsed.file = Some(arg.clone());
        } else {
            bail!("Unexpected argument: {}", arg);
        }
    }

    Ok(parsed)
}

/// Plain-text report printed by `analyze`
fn format_report(result: &AnalysisResult, tone: Tone) -> String {
    let mut out = format!("Intent: {}\n", result.intent);
    if !result.intent_explanation.is_empty() {
        out.push_str(&format!("{}\n", result.intent_explanation));
    }
    out.push_str(&format!("\n--- {} reply ---\n", tone.label()));
    match result.reply(tone) {
        Some(reply) => out.push_str(reply),
        None => out.push_str("(no reply generated for this tone)"),
    }
    out.push('\n');
    out
}

async fn run_analyze(args: &[String]) -> Result<()> {
    let args = parse_analyze_args(args)?;
    let config = Config::load()?;

    let email_text = match args.file.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read email from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read email file: {}", path))?,
    };

    if let Err(e) = validate_email_text(&email_text) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = AnalysisClient::new(&config.service.base_url, config.service.timeout())?;
    match client.analyze_email(&email_text).await {
        Ok(result) => {
            print!("{}", format_report(&result, args.tone));
            io::stdout().flush()?;
            Ok(())
        }
        Err(e) => {
            tracing::warn!("One-shot analysis failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

async fn run_check() -> Result<()> {
    let config = Config::load()?;
    let client = AnalysisClient::new(&config.service.base_url, config.service.timeout())?;

    println!("Checking {} ...", client.base_url());
    match client.health().await {
        Ok(health) => {
            if health.message.is_empty() {
                println!("Service status: {}", health.status);
            } else {
                println!("Service status: {} ({})", health.status, health.message);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Service unreachable: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_init() -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() {
        print!("Configuration already exists. Overwrite? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    Config::default().save()?;
    println!("Configuration saved to {}", config_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("analyze") => {
            setup_logging();
            run_analyze(&args[2..]).await
        }
        Some("check") => {
            setup_logging();
            run_check().await
        }
        Some("init") => run_init(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;

            // Initialize theme from config
            crate::ui::theme::init_theme(config.ui.theme);

            let mut app = App::new(&config)?;
            app.run().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_analyze_args() {
        assert_eq!(parse_analyze_args(&[]).unwrap(), AnalyzeArgs::default());

        let parsed = parse_analyze_args(&args(&["mail.txt", "--tone", "Friendly"])).unwrap();
        assert_eq!(parsed.file.as_deref(), Some("mail.txt"));
        assert_eq!(parsed.tone, Tone::Friendly);

        let parsed = parse_analyze_args(&args(&["--tone=persuasive"])).unwrap();
        assert_eq!(parsed.file, None);
        assert_eq!(parsed.tone, Tone::Persuasive);
    }

    #[test]
    fn test_parse_analyze_args_errors() {
        assert!(parse_analyze_args(&args(&["--tone"])).is_err());
        assert!(parse_analyze_args(&args(&["--tone", "sarcastic"])).is_err());
        assert!(parse_analyze_args(&args(&["a.txt", "b.txt"])).is_err());
    }

    #[test]
    fn test_format_report() {
        let mut replies = HashMap::new();
        replies.insert("formal".to_string(), "Dear Ms. Park,".to_string());
        let result = AnalysisResult {
            intent: "Inquiry".to_string(),
            intent_explanation: "Asks about pricing".to_string(),
            replies,
        };

        assert_eq!(
            format_report(&result, Tone::Formal),
            "Intent: Inquiry\nAsks about pricing\n\n--- Formal reply ---\nDear Ms. Park,\n"
        );
        assert!(format_report(&result, Tone::Friendly).contains("(no reply generated"));
    }
}
