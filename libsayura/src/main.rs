use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libsayura::{Action, Engine, KeyEvent, SayuraConfig, CONSONANTS, VOWELS};

#[derive(Parser)]
#[command(name = "sayura", about = "Sayura Sinhala transliteration demo")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive line-by-line REPL (the default).
    Repl,
    /// Transliterate one romanized string and exit.
    Type { text: String },
    /// Dump the consonant and vowel tables.
    Table,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SayuraConfig::load_toml(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => SayuraConfig::default(),
    };

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(&config),
        Command::Type { text } => {
            println!("{}", transliterate(&text, config));
            Ok(())
        }
        Command::Table => {
            print_tables();
            Ok(())
        }
    }
}

/// Feed a whole line through a fresh engine, playing the host role:
/// committed text is collected, forwarded keys land as themselves, and the
/// leftover preedit is flushed at the end of the line.
fn transliterate(text: &str, config: SayuraConfig) -> String {
    let mut engine = Engine::with_config(config);
    let mut out = String::new();

    for ch in text.chars() {
        match engine.process_key(KeyEvent::from_char(ch)) {
            Action::Ignored => {}
            Action::Update { forward } => {
                if forward {
                    out.push(ch);
                }
            }
            Action::Commit { text, forward } => {
                out.push_str(&text);
                if forward {
                    out.push(ch);
                }
            }
            Action::PassThrough => out.push(ch),
            Action::ResetAndForward => engine.reset(),
        }
    }

    out.push_str(&engine.preedit());
    out
}

fn run_repl(config: &SayuraConfig) -> Result<()> {
    println!("sayura demo CLI — type romanized Sinhala and press Enter");
    println!("Example: amwma (\u{0D85}\u{0DB8}\u{0DCA}\u{0DB8}\u{0DCF})");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line.context("read stdin")?;
        let input = raw.trim_end();
        if input.is_empty() {
            continue;
        }
        println!("  {}", transliterate(input, config.clone()));
    }
    Ok(())
}

fn print_tables() {
    println!("consonants (key: base / mahaprana / sagngnaka):");
    for c in CONSONANTS {
        println!(
            "  {}: {} / {} / {}",
            c.key,
            c.base,
            c.mahaprana.map_or("-".to_string(), |g| g.to_string()),
            c.sagngnaka.map_or("-".to_string(), |g| g.to_string()),
        );
    }

    println!("vowels (key: standalone/long, sign/long):");
    for v in VOWELS {
        println!(
            "  {}: {} {} , {} {}",
            v.key,
            v.standalone,
            v.long_standalone,
            v.sign.map_or("-".to_string(), |g| g.to_string()),
            v.long_sign.map_or("-".to_string(), |g| g.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_word_with_space() {
        let out = transliterate("amwma ", SayuraConfig::default());
        assert_eq!(out, "\u{0D85}\u{0DB8}\u{0DCA}\u{0DB8}\u{0DCF} ");
    }

    #[test]
    fn test_transliterate_flushes_trailing_preedit() {
        let out = transliterate("ka", SayuraConfig::default());
        assert_eq!(out, "\u{0D9A}\u{0DCF}");
    }
}
