use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use encoding_fixtures::generator::code_pages;
use encoding_fixtures::{BomMode, DEFAULT_MANIFEST, GeneratorConfig, Probe, UNICODE_CATALOG};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    " ",
    env!("BUILD_TARGET"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Generate byte fixtures and expected strings for text encoding tests.",
    long_about = r#"Generate byte fixtures and expected strings for text encoding tests.
Writes one file per single-byte code page holding every decodable byte, two files per Unicode format holding a boundary codepoint sample, and a manifest recording what each file must decode to."#
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write every fixture file and the manifest
    Generate {
        #[command(flatten)]
        target: TargetArgs,

        /// Start each `_bom` fixture with the format's byte-order mark
        #[arg(long = "bom-prefix", action = ArgAction::SetTrue)]
        bom_prefix: bool,
    },
    /// Check that every fixture decodes to its manifest entry
    Verify {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print the encoding catalogs
    List,
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Directory holding the fixtures and the manifest
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".", value_hint = clap::ValueHint::DirPath)]
    out_dir: PathBuf,

    /// Manifest file name inside the output directory
    #[arg(short = 'm', long = "manifest", value_name = "NAME", default_value = DEFAULT_MANIFEST)]
    manifest: String,
}

impl TargetArgs {
    fn into_config(self, bom_mode: BomMode) -> GeneratorConfig {
        GeneratorConfig {
            out_dir: self.out_dir,
            manifest_name: self.manifest,
            bom_mode,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("encoding-fixtures: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Generate { target, bom_prefix } => {
            let bom_mode = if bom_prefix {
                BomMode::Prefix
            } else {
                BomMode::Mirror
            };
            let config = target.into_config(bom_mode);
            encoding_fixtures::generate(&config).with_context(|| {
                format!("failed to generate fixtures in '{}'", config.out_dir.display())
            })?;
        }
        Command::Verify { target } => {
            let config = target.into_config(BomMode::default());
            encoding_fixtures::verify(&config).with_context(|| {
                format!("failed to verify fixtures in '{}'", config.out_dir.display())
            })?;
        }
        Command::List => print_catalogs(),
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::WARN,
        (false, 0) => LevelFilter::INFO,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_catalogs() {
    for page in code_pages() {
        let probe = match page.probe {
            Probe::Exhaustive => "0x00-0xff".to_string(),
            Probe::Ranges(ranges) => ranges
                .iter()
                .map(|r| format!("{:#04x}-{:#04x}", r.start(), r.end()))
                .collect::<Vec<_>>()
                .join(","),
        };
        println!("{}\tsingle-byte\t{}", page.name, probe);
    }
    for format in UNICODE_CATALOG {
        println!("{}\tunicode\tfile_{}.txt", format, format.file_stem());
    }
}
