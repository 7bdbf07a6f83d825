mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "billscan",
    version,
    about = "Convert AWS billing PDF statements into tabular usage records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract flat usage records from one or more billing PDFs
    Extract {
        /// Path(s) to billing PDF file(s); records are concatenated in order
        input_files: Vec<PathBuf>,

        /// Output format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom service/region vocabulary (JSON file)
        #[arg(long = "vocab", value_name = "FILE")]
        vocab: Option<PathBuf>,
    },
    /// Render one billing PDF as a structured tab-delimited report
    Report {
        /// Path to a billing PDF file
        input_file: PathBuf,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom service/region vocabulary (JSON file)
        #[arg(long = "vocab", value_name = "FILE")]
        vocab: Option<PathBuf>,
    },
    /// Inspect the builtin vocabulary
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List the builtin service and region names in precedence order
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_files,
            output,
            out,
            vocab,
        } => commands::extract::run(input_files, &output, out, vocab),
        Commands::Report {
            input_file,
            out,
            vocab,
        } => commands::report::run(input_file, out, vocab),
        Commands::Vocab { action } => match action {
            VocabAction::List => commands::vocab::list(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
