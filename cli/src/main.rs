use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::info;

/// Renders plan markup (as produced by the GymAI assistant) into a styled
/// PDF document.
///
/// Fonts must be present under `assets/fonts` relative to the `plan_pdf`
/// crate or provided via the `PLAN_PDF_FONTS_DIR` environment variable.
#[derive(Parser)]
#[command(author, version, about = "Render plan markup to a styled PDF")]
struct Cli {
    /// Markup input file, or `-` to read from stdin.
    input: PathBuf,

    /// Document title shown in the banner.
    #[arg(long, default_value = "Plan GymAI")]
    title: String,

    /// Output PDF path.
    #[arg(short, long, default_value = "plan-gymai.pdf")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let source = if cli.input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.input)?
    };

    let bytes = plan_pdf::render_plan_pdf(&cli.title, &source)?;
    fs::write(&cli.output, &bytes)?;
    info!("wrote {} bytes to {}", bytes.len(), cli.output.display());
    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
