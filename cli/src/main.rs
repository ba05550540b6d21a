//! mkdocx CLI - render extraction JSON into Word documents

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use mkdocx::{Document, Error, Exporter, Payload};

#[derive(Parser)]
#[command(name = "mkdocx")]
#[command(version)]
#[command(about = "Render extraction JSON into formatted Word documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON payload file to a DOCX document
    Convert {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file or directory (defaults to the suggested filename
        /// in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Font family applied to every run
        #[arg(long, value_name = "FAMILY")]
        font: Option<String>,
    },

    /// Show the resolved document without rendering it
    Info {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            font,
        } => cmd_convert(&input, output.as_deref(), font),
        Commands::Info { input } => cmd_info(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>, font: Option<String>) -> Result<(), Error> {
    let data = fs::read(input)?;
    log::debug!("read {} bytes from {}", data.len(), input.display());

    let mut options = mkdocx::ExportOptions::new();
    if let Some(family) = font {
        options = options.with_font_family(family);
    }

    let export = Exporter::with_options(options).export_bytes(&data)?;
    let target = resolve_output_path(output, &export.filename);

    fs::write(&target, &export.bytes)?;
    println!(
        "{} {} ({} bytes)",
        "created".green().bold(),
        target.display(),
        export.bytes.len()
    );
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Error> {
    let data = fs::read(input)?;
    let text = std::str::from_utf8(&data)
        .map_err(|e| Error::MalformedPayload(format!("not valid UTF-8: {}", e)))?;
    let value =
        serde_json::from_str(text).map_err(|e| Error::MalformedPayload(e.to_string()))?;
    let doc = Document::from_payload(Payload::from_value(value)?);

    println!("{} {}", "title:".bold(), doc.title);
    println!("{} {}", "pages:".bold(), doc.page_count());
    for (i, page) in doc.pages.iter().enumerate() {
        let label = page.page_label.as_deref().unwrap_or("(suppressed)");
        println!(
            "  {}. {} [{}] {} columns, {} rows",
            i + 1,
            page.section_title,
            label,
            page.headers.len(),
            page.row_count()
        );
    }
    Ok(())
}

/// Resolve where the document lands: an explicit file path wins, a
/// directory gets the suggested filename, and no output at all means the
/// suggested filename in the current directory.
fn resolve_output_path(output: Option<&Path>, suggested: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(suggested),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(suggested),
    }
}
