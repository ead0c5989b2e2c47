//! `cfgreport` CLI — validate configuration files and render them as reports.
//!
//! ## Usage
//!
//! ```sh
//! # Validate and render a YAML config (stdin → stdout)
//! cat config.yaml | cfgreport report
//!
//! # From file to file
//! cfgreport report -i config.yaml -o output.txt
//!
//! # Key/colon layout instead of sections
//! cfgreport report -i config.yaml --style plain
//!
//! # Only validate; JSON error list for tooling
//! cfgreport validate -i config.json --json
//!
//! # Look up a single value
//! cfgreport get Server.port -i config.yaml
//! ```
//!
//! Set `RUST_LOG=debug` to trace decoding and rule evaluation on stderr.

use anyhow::{Context, Result};
use cfgreport_core::{
    ConfigValue, ReportStyle, SerializeOptions, SourceFormat, ValidationError, ValidationMode,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(
    name = "cfgreport",
    version,
    about = "Validate configuration files and render them as indented reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, then write the indented report
    Report {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Report layout
        #[arg(long, value_enum, default_value_t = StyleArg::Sectioned)]
        style: StyleArg,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Render even if the document has rule violations
        #[arg(long)]
        no_validate: bool,
    },
    /// Check field rules and list violations
    Validate {
        #[command(flatten)]
        source: SourceArgs,
        /// Stop at the first violation
        #[arg(long)]
        fail_fast: bool,
        /// Print violations as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the value at a dotted path (e.g. `Logging.file.max_size`)
    Get {
        /// Dotted key path
        path: String,
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Input format (detected from the file extension if omitted; stdin defaults to yaml)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Sectioned,
    Plain,
}

impl From<FormatArg> for SourceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => SourceFormat::Yaml,
            FormatArg::Json => SourceFormat::Json,
        }
    }
}

impl From<StyleArg> for ReportStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Sectioned => ReportStyle::Sectioned,
            StyleArg::Plain => ReportStyle::Plain,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            source,
            output,
            style,
            indent,
            no_validate,
        } => {
            let root = load(&source)?;

            if !no_validate {
                let errors = cfgreport_core::validate(&root)
                    .context("Failed to validate configuration")?;
                if !errors.is_empty() {
                    print_errors(&errors);
                    anyhow::bail!(
                        "configuration has {} validation error(s); report not written",
                        errors.len()
                    );
                }
            }

            let options = SerializeOptions {
                style: style.into(),
                indent_width: indent,
            };
            let report = cfgreport_core::render_with(&root, &options)
                .context("Failed to serialize configuration")?;
            write_output(output.as_deref(), &report)?;
        }
        Commands::Validate {
            source,
            fail_fast,
            json,
        } => {
            let root = load(&source)?;
            let mode = if fail_fast {
                ValidationMode::FailFast
            } else {
                ValidationMode::CollectAll
            };
            let errors = cfgreport_core::validate_with(&root, mode)
                .context("Failed to validate configuration")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else if errors.is_empty() {
                println!("OK");
            } else {
                for error in &errors {
                    println!("{}", error);
                }
            }
            if !errors.is_empty() {
                process::exit(1);
            }
        }
        Commands::Get { path, source } => {
            let root = load(&source)?;
            match cfgreport_core::resolve(&root, &path) {
                Some(value) => print!("{}", render_fragment(value)),
                None => {
                    eprintln!("not found: {}", path);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Read and decode the input document.
fn load(source: &SourceArgs) -> Result<ConfigValue> {
    let text = read_input(source.input.as_deref())?;
    let format = match (source.format, source.input.as_deref()) {
        (Some(arg), _) => arg.into(),
        (None, Some(path)) => SourceFormat::from_path(Path::new(path)),
        (None, None) => SourceFormat::Yaml,
    };
    tracing::debug!(?format, bytes = text.len(), "decoding input");
    cfgreport_core::decode(&text, format).with_context(|| match source.input.as_deref() {
        Some(path) => format!("Failed to decode {}", path),
        None => "Failed to decode stdin".to_string(),
    })
}

fn render_fragment(value: &ConfigValue) -> String {
    cfgreport_core::join_lines(&cfgreport_core::serialize_value(
        value,
        &SerializeOptions::default(),
    ))
}

fn print_errors(errors: &[ValidationError]) {
    for error in errors {
        eprintln!("{}", error);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::info!(path, "reading configuration");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::info!(path, "report written");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
