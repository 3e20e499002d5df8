//! Secure Password Generator CLI
//!
//! Prints one generated password per line. Settings come from an optional
//! TOML file and are overridden by command-line flags.

use clap::Parser;
use secure_pwgen::{Config, FileConfig, Generator, Strength};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "secure-pwgen", version, about = "Generate random passwords")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Password length.
    #[arg(short, long, conflicts_with = "strength")]
    length: Option<u32>,

    /// Named length tier: weak, ok, strong or very-strong.
    #[arg(short, long)]
    strength: Option<Strength>,

    /// Number of passwords to generate.
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Explicit alphabet; class and exclusion flags are ignored.
    #[arg(long)]
    charset: Option<String>,

    /// Leave out symbols.
    #[arg(long)]
    no_symbols: bool,

    /// Leave out digits.
    #[arg(long)]
    no_numbers: bool,

    /// Leave out lowercase letters.
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out uppercase letters.
    #[arg(long)]
    no_uppercase: bool,

    /// Keep look-alike characters such as l, O, 0 and 1.
    #[arg(long)]
    allow_similar: bool,

    /// Keep symbols that often need escaping, such as brackets and quotes.
    #[arg(long)]
    allow_ambiguous: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(strength) = self.strength {
            config.length = strength.length();
        }
        if let Some(ref charset) = self.charset {
            config.character_set = charset.clone();
        }
        config.include_symbols &= !self.no_symbols;
        config.include_numbers &= !self.no_numbers;
        config.include_lowercase_letters &= !self.no_lowercase;
        config.include_uppercase_letters &= !self.no_uppercase;
        config.exclude_similar_characters &= !self.allow_similar;
        config.exclude_ambiguous_characters &= !self.allow_ambiguous;
    }
}

fn main() {
    // Diagnostics go to stderr so stdout carries only passwords
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let file_config = match args.config {
        Some(ref path) => match FileConfig::from_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let mut config = file_config.password;
    args.apply(&mut config);
    let count = args.count.unwrap_or(file_config.output.count);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut generator = Generator::with_config(config);
    info!(
        "Secure Password Generator v{}: {} password(s) of length {} from {} characters",
        secure_pwgen::VERSION,
        count,
        generator.length(),
        generator.alphabet().len()
    );

    match generator.generate_many(count) {
        Ok(passwords) => {
            for password in passwords {
                println!("{}", password);
            }
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
