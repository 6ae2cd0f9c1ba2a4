//! sktl2liquid command-line interface

use clap::{Parser, Subcommand};
use sktl_liquid::cli::{check, convert, output};
use std::path::PathBuf;

/// SKTL to Liquid template converter
#[derive(Parser)]
#[command(name = "sktl2liquid")]
#[command(author, version, about = "Convert parsed SKTL templates to Liquid", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a parsed template (parser JSON) to Liquid
    Convert {
        /// Parsed template file
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that parsed templates convert, without writing output
    Check {
        /// Parsed template files
        files: Vec<PathBuf>,

        /// Strict mode (unclosed blocks fail the check)
        #[arg(short, long)]
        strict: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    output::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            file,
            output: output_file,
        } => convert::convert(convert::ConvertConfig { file, output_file }),
        Commands::Check { files, strict } => check::check(check::CheckConfig {
            files,
            strict,
            verbose: cli.verbose,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
