//! mdhtml CLI - Markdown to HTML conversion tool

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdhtml::convert::{convert_batch, BatchJob, Converter};
use mdhtml::render::to_json;
use mdhtml::{JsonFormat, LineEnding, RenderOptions, WriterSink};

/// Source read when no input file is given.
const DEFAULT_INPUT: &str = "test.md";

/// Destination written when no output file is given.
const DEFAULT_OUTPUT: &str = "result.html";

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(version)]
#[command(about = "Convert lightweight Markdown to HTML", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to HTML
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        /// Print conversion statistics as JSON to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Convert several files in parallel
    Batch {
        /// Input Markdown files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show how a file is split into paragraphs, as JSON
    Dump {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Use CRLF line endings
    #[arg(long)]
    crlf: bool,

    /// Leave emphasis markers untouched
    #[arg(long)]
    no_inline: bool,

    /// Normalize input to Unicode NFC
    #[arg(long, env = "MDHTML_NORMALIZE")]
    normalize: bool,
}

impl From<&RenderArgs> for RenderOptions {
    fn from(args: &RenderArgs) -> Self {
        let ending = if args.crlf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        RenderOptions::new()
            .with_line_ending(ending)
            .with_inline(!args.no_inline)
            .with_unicode_normalization(args.normalize)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            render,
            stats,
        }) => cmd_convert(&input, output.as_deref(), &render, stats),
        Some(Commands::Batch {
            inputs,
            dir,
            render,
        }) => cmd_batch(&inputs, &dir, &render),
        Some(Commands::Dump { input, compact }) => cmd_dump(&input, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert FILE (or test.md) into OUTPUT (or result.html)
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            cmd_default(&input, &output)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_default(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    mdhtml::convert_file(input, output)?;
    println!("Check your {} file!", output.display().to_string().green());
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    render: &RenderArgs,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenderOptions::from(render);

    let stats = if let Some(path) = output {
        let stats = mdhtml::convert_file_with_options(input, path, &options)?;
        println!("{} {}", "Saved to".green(), path.display());
        stats
    } else {
        let mut converter = Converter::open(input, options.clone())?;
        let stdout = io::stdout();
        let mut sink = WriterSink::with_line_ending(BufWriter::new(stdout.lock()), options.line_ending);
        converter.run(&mut sink)?
    };

    if show_stats {
        eprintln!("{}", to_json(&stats, JsonFormat::Pretty)?);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    dir: &Path,
    render: &RenderArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let options = RenderOptions::from(render);
    let jobs: Vec<BatchJob> = inputs
        .iter()
        .map(|input| BatchJob::in_dir(input, dir))
        .collect();

    log::debug!("Converting {} files into {}", jobs.len(), dir.display());
    let results = convert_batch(&jobs, &options);

    let mut failed = 0;
    for (job, result) in jobs.iter().zip(&results) {
        match result {
            Ok(_) => println!("{} {}", "Converted".green(), job.output.display()),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "Failed".red(), job.input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} of {} files converted",
        "Done!".green().bold(),
        jobs.len() - failed,
        jobs.len()
    );

    if failed > 0 {
        return Err(format!("{} files failed", failed).into());
    }
    Ok(())
}

fn cmd_dump(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = mdhtml::ReaderSource::open(input)?;
    let paragraphs: Vec<_> = mdhtml::Segmenter::new(source).collect();

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&paragraphs, format)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to HTML conversion tool");
    println!();
    println!("License: MIT");
}
