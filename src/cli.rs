//! Seedphrase CLI - generate, check and stretch mnemonic phrases

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use seedphrase::{MnemonicCodec, MnemonicConfig};

/// Parsed command line
#[derive(Debug)]
enum Command {
    /// Print a fresh phrase
    Generate { bits: Option<u32> },
    /// Check a phrase
    Validate { phrase: String },
    /// Derive and print the seed of a phrase
    Seed { phrase: String, passphrase: String },
    /// Print the SHA-256 of the active wordlist
    WordlistDigest,
    /// Print usage
    Help,
}

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut config = None;
    let mut bits = None;
    let mut passphrase = String::new();
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--bits" | "-b" => {
                i += 1;
                let value = args.get(i).context("--bits needs a value")?;
                bits = Some(value.parse::<u32>().with_context(|| format!("invalid bit count {value}"))?);
            }
            "--passphrase" | "-p" => {
                i += 1;
                passphrase.clone_from(args.get(i).context("--passphrase needs a value")?);
            }
            "--help" | "-h" => {
                return Ok(Args {
                    config,
                    command: Command::Help,
                })
            }
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            word => positional.push(word.to_string()),
        }
        i += 1;
    }

    let Some((name, rest)) = positional.split_first() else {
        return Ok(Args {
            config,
            command: Command::Help,
        });
    };
    let phrase = rest.join(" ");

    let command = match name.as_str() {
        "generate" => Command::Generate { bits },
        "validate" => Command::Validate { phrase },
        "seed" => Command::Seed { phrase, passphrase },
        "wordlist-digest" => Command::WordlistDigest,
        "help" => Command::Help,
        other => bail!("unknown command {other}"),
    };

    Ok(Args { config, command })
}

fn print_help() {
    println!("Seedphrase v{}", seedphrase::VERSION);
    println!();
    println!("USAGE:");
    println!("    seedphrase [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    generate                    Print a new mnemonic phrase");
    println!("    validate <WORDS>...         Check a phrase (exit code 1 if invalid)");
    println!("    seed <WORDS>...             Derive the 64-byte seed (hex)");
    println!("    wordlist-digest             Print the SHA-256 of the wordlist");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>         Config file (default: ~/.seedphrase/config.json)");
    println!("    -b, --bits <BITS>           Entropy bits: 128, 160, 192, 224 or 256");
    println!("    -p, --passphrase <TEXT>     Passphrase for seed derivation");
    println!("    -h, --help                  Print help");
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => MnemonicConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MnemonicConfig::load_default().context("loading default config")?,
    };
    let codec = MnemonicCodec::from_config(&config)?;
    debug!(?codec, "Codec ready");

    match args.command {
        Command::Generate { bits } => {
            let phrase = match bits {
                Some(bits) => codec.generate_bits(bits)?,
                None => codec.generate(config.entropy_bits)?,
            };
            eprintln!(
                "{}",
                style("Write these words down and store them securely.").yellow().bold()
            );
            println!("{phrase}");
        }
        Command::Validate { phrase } => {
            if let Err(e) = codec.check(&phrase) {
                println!("{} {e}", style("invalid:").red().bold());
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", style("valid").green().bold());
        }
        Command::Seed { phrase, passphrase } => {
            let seed = codec.to_seed(&phrase, &passphrase)?;
            println!("{}", seed.to_hex());
        }
        Command::WordlistDigest => {
            println!("{}", codec.wordlist().digest());
        }
        Command::Help => print_help(),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&raw).and_then(run);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_generate_with_bits() {
        let parsed = parse_args(&args("generate --bits 256")).unwrap();
        assert!(matches!(parsed.command, Command::Generate { bits: Some(256) }));
    }

    #[test]
    fn test_parse_seed_joins_words() {
        let parsed = parse_args(&args("-p secret seed legal winner thank")).unwrap();
        match parsed.command {
            Command::Seed { phrase, passphrase } => {
                assert_eq!(phrase, "legal winner thank");
                assert_eq!(passphrase, "secret");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let parsed = parse_args(&args("--config /tmp/c.json wordlist-digest")).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/c.json")));
        assert!(matches!(parsed.command, Command::WordlistDigest));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args("frobnicate")).is_err());
        assert!(parse_args(&args("generate --bits")).is_err());
        assert!(parse_args(&args("generate --bits many")).is_err());
        assert!(parse_args(&args("--verbose generate")).is_err());
    }

    #[test]
    fn test_empty_is_help() {
        assert!(matches!(parse_args(&[]).unwrap().command, Command::Help));
    }
}
