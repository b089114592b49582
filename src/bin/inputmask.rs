//! CLI tool for input masking.
//!
//! # Usage
//!
//! ```bash
//! # Format a value
//! inputmask format 4111111111111111 --mask credit-card
//!
//! # Format with options given as JSON (inline or @file)
//! inputmask format 12312023 --mask date --options '{"delimiter": "/", "pattern": "mdY"}'
//!
//! # Format every line of stdin
//! cat numbers.txt | inputmask format - --mask phone
//!
//! # Strip formatting
//! inputmask unformat "1,234.56" --mask numeral
//!
//! # Detect a card brand
//! inputmask detect 3782
//!
//! # Replay a keystroke and show where the caret lands
//! inputmask cursor --mask credit-card --previous 411 --raw 4111 --caret 4
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use input_mask::detect::card_info;
use input_mask::stream::FormatExt;
use input_mask::{Mask, MaskError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inputmask")]
#[command(author, version, about = "Format and unformat masked input values")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a value (use "-" to read one value per line from stdin)
    Format {
        /// Value to format
        value: String,

        #[command(flatten)]
        mask: MaskArgs,
    },

    /// Remove the formatting from a value
    Unformat {
        /// Formatted value
        value: String,

        #[command(flatten)]
        mask: MaskArgs,
    },

    /// Detect the card brand of a (partial) card number
    Detect {
        /// Card number or prefix
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the formatted value and caret after one edit
    Cursor {
        /// Value shown before the edit
        #[arg(long, default_value = "")]
        previous: String,

        /// Value right after the edit
        #[arg(long)]
        raw: String,

        /// Caret offset in the raw value
        #[arg(long)]
        caret: usize,

        #[command(flatten)]
        mask: MaskArgs,
    },
}

#[derive(clap::Args)]
struct MaskArgs {
    /// Mask to apply
    #[arg(short, long, default_value = "credit-card")]
    mask: MaskArg,

    /// Options as a JSON object, or @path to a JSON file
    #[arg(short, long)]
    options: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MaskArg {
    CreditCard,
    Date,
    Time,
    Numeral,
    Phone,
    General,
}

impl MaskArg {
    fn name(self) -> &'static str {
        match self {
            MaskArg::CreditCard => "credit-card",
            MaskArg::Date => "date",
            MaskArg::Time => "time",
            MaskArg::Numeral => "numeral",
            MaskArg::Phone => "phone",
            MaskArg::General => "general",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
enum CliError {
    Mask(MaskError),
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Mask(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<MaskError> for CliError {
    fn from(e: MaskError) -> Self {
        CliError::Mask(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Format { value, mask } => cmd_format(&value, &mask),
        Commands::Unformat { value, mask } => cmd_unformat(&value, &mask),
        Commands::Detect {
            card_number,
            output,
        } => {
            cmd_detect(&card_number, output);
            Ok(())
        }
        Commands::Cursor {
            previous,
            raw,
            caret,
            mask,
        } => cmd_cursor(&previous, &raw, caret, &mask),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "input_mask=debug",
        _ => "input_mask=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build_mask(args: &MaskArgs) -> Result<Mask, CliError> {
    let name = args.mask.name();
    let mask = match &args.options {
        None => {
            let mask = Mask::from_name(name)?;
            mask.validate()?;
            mask
        }
        Some(options) => {
            let json = match options.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)?,
                None => options.clone(),
            };
            Mask::from_json(name, &json)?
        }
    };

    tracing::debug!(?mask, "using mask");
    Ok(mask)
}

fn cmd_format(value: &str, args: &MaskArgs) -> Result<(), CliError> {
    let mask = build_mask(args)?;

    if value == "-" {
        let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
        for formatted in lines.iter().format_with(&mask) {
            println!("{}", formatted);
        }
    } else {
        println!("{}", mask.format(value));
    }
    Ok(())
}

fn cmd_unformat(value: &str, args: &MaskArgs) -> Result<(), CliError> {
    let mask = build_mask(args)?;

    if value == "-" {
        let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
        for digits in lines.iter().unformat_with(&mask) {
            println!("{}", digits);
        }
    } else {
        println!("{}", mask.unformat(value));
    }
    Ok(())
}

fn cmd_detect(card_number: &str, output: OutputFormat) {
    let info = card_info(card_number, false);
    let blocks: Vec<String> = info.blocks.iter().map(usize::to_string).collect();

    match output {
        OutputFormat::Text => {
            println!("Brand: {}", info.brand.name());
            println!("Blocks: {}", blocks.join("-"));
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "brand": info.brand.tag(),
                "name": info.brand.name(),
                "blocks": info.blocks,
            });
            println!("{}", json);
        }
    }
}

fn cmd_cursor(previous: &str, raw: &str, caret: usize, args: &MaskArgs) -> Result<(), CliError> {
    let mask = build_mask(args)?;
    let edit = mask.apply(previous, raw, caret);

    let (before, after): (String, String) = {
        let chars: Vec<char> = edit.value.chars().collect();
        (chars[..edit.caret].iter().collect(), chars[edit.caret..].iter().collect())
    };

    println!("Value: {}", edit.value);
    println!("Caret: {}", edit.caret);
    println!("       {}|{}", before, after);
    Ok(())
}
