//! mdeck - Markdown to PowerPoint converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mdeck::convert_file;

#[derive(Parser)]
#[command(name = "mdeck")]
#[command(version, about = "Convert Markdown to PowerPoint presentations", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdeck talk.md                  Write talk.pptx next to the input
    mdeck talk.md -o slides.pptx   Choose the output path")]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PPTX file (default: input path with a .pptx extension)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match convert_file(&cli.input, cli.output.as_deref()) {
        Ok(path) => {
            if !cli.quiet {
                println!("Created: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
