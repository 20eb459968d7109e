use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::io::Write;

use md5_engine_cli::config::{ConfigManager, get_config};
use md5_engine_cli::digest_command::{self, DigestRequest, InputSource};
use md5_engine_cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "md5digest")]
#[command(author, version, about = "Compute RFC 1321 MD5 digests", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Text to hash (defaults to input.default_text from the configuration)
    #[arg(conflicts_with = "stdin")]
    text: Option<String>,

    /// Read the bytes to hash from standard input
    #[arg(long)]
    stdin: bool,

    /// Feed the engine this many bytes per update
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    chunk_size: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the hex digest in uppercase (text output only)
    #[arg(short, long)]
    uppercase: bool,

    /// Expected digest; exit with an error when the input does not match
    #[arg(long, value_name = "HEX")]
    check: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., input.chunk_size)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., output.default_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("md5_engine_core", log::LevelFilter::Debug)
            .filter_module("md5_engine_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match cli.command {
        Some(Commands::Config { command }) => config_command(command)?,
        Some(Commands::Completions { shell }) => generate_completions(shell),
        None => {
            let chunk_size = cli
                .chunk_size
                .map(usize::try_from)
                .transpose()
                .context("--chunk-size does not fit in memory on this platform")?;
            let source = InputSource::from_args(cli.text, cli.stdin);
            digest_input(source, chunk_size, cli.format, cli.uppercase, cli.check)?;
        }
    }

    Ok(())
}

fn digest_input(
    source: InputSource,
    chunk_size: Option<usize>,
    format: Option<OutputFormat>,
    uppercase: bool,
    check: Option<String>,
) -> Result<()> {
    let mut config = get_config()?;
    config.apply_cli_overrides(chunk_size, format, uppercase);
    log::debug!("Effective configuration: {config:?}");

    let input = source.read_bytes(&config, std::io::stdin().lock())?;
    let request = DigestRequest::from_config(input, &config, check)?;
    let rendered = digest_command::execute(&request)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}

fn config_command(command: ConfigCommand) -> Result<()> {
    let mut manager = ConfigManager::new();

    if manager.load().is_ok_and(|config| !config.output.color_enabled) {
        colored::control::set_override(false);
    }

    match command {
        ConfigCommand::Get { key } => match manager.get(&key) {
            Ok(value) => {
                println!("{value}");
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::Set { key, value } => match manager.set(&key, &value) {
            Ok(()) => {
                eprintln!("{}", format!("Set {key} = {value}").green());
                eprintln!(
                    "Configuration saved to: {}",
                    manager.get_config_path().display()
                );
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::List => match manager.list() {
            Ok(items) => {
                eprintln!("{}", "Configuration:".bold().blue());
                eprintln!("Config file: {}", manager.get_config_path().display());
                eprintln!();

                let mut current_section = None;
                for (key, value) in items {
                    let (section, field) = key.split_once('.').unwrap_or(("general", key.as_str()));
                    if current_section.as_deref() != Some(section) {
                        if current_section.is_some() {
                            println!();
                        }
                        println!("[{}]", section.yellow());
                        current_section = Some(section.to_string());
                    }
                    println!("  {} = {}", field.cyan(), value);
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
