//! Command-line front end for utm-tagger.
//!
//! Reads a rendered document, adds UTM tracking parameters to its links and
//! writes the result back out. File I/O lives here; the library itself never
//! touches the filesystem.
//!
//! # Usage
//!
//! ```bash
//! # Tag a post and print it to stdout
//! utm-tagger --source newsletter --medium email --campaign launch tag post.md
//!
//! # Tag a post in place, with a summary on stderr
//! utm-tagger tag post.md --in-place --summary
//!
//! # Tag a single URL
//! utm-tagger url "https://example.com/post?ref=1"
//!
//! # List the links of a post, marking images
//! utm-tagger find post.md
//! ```
//!
//! # Environment Variables
//!
//! - `UTM_SOURCE`, `UTM_MEDIUM`, `UTM_CAMPAIGN`: defaults for the tracking flags
//! - `RUST_LOG`, `LOG_FORMAT`: logging, see [`utm_tagger::config`]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use utm_tagger::UtmTagger;
use utm_tagger::application::tagging::document_text;
use utm_tagger::config::{self, Config};
use utm_tagger::domain::{TaggingReport, TrackingParams, UrlParts};
use utm_tagger::telemetry;
use utm_tagger::utils::image::is_image;
use utm_tagger::utils::url_finder::find_urls;

/// Adds UTM campaign parameters to the links of a rendered document.
#[derive(Parser)]
#[command(name = "utm-tagger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    tracking: TrackingArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Tracking triple overrides.
#[derive(Args)]
struct TrackingArgs {
    /// Value for utm_source (overrides UTM_SOURCE)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Value for utm_medium (overrides UTM_MEDIUM)
    #[arg(long, global = true)]
    medium: Option<String>,

    /// Value for utm_campaign (overrides UTM_CAMPAIGN)
    #[arg(long, global = true)]
    campaign: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag every non-image link in a document
    Tag {
        /// Input file (reads stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (writes stdout if omitted)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file
        #[arg(long, requires = "input")]
        in_place: bool,

        /// Print a summary to stderr
        #[arg(long)]
        summary: bool,

        /// Print a JSON summary to stderr
        #[arg(long, conflicts_with = "summary")]
        json_summary: bool,
    },

    /// Tag a single URL
    Url {
        /// URL to annotate
        url: String,
    },

    /// List the URLs found in a document
    Find {
        /// Input file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
}

/// Machine-readable summary of one `tag` run.
#[derive(Serialize)]
struct Summary<'a> {
    tracking: &'a TrackingParams,
    report: &'a TaggingReport,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config);
    config.print_summary();

    match cli.command {
        Commands::Tag {
            input,
            output,
            in_place,
            summary,
            json_summary,
        } => {
            let tagger = build_tagger(&config, cli.tracking)?;
            let destination = if in_place { input.clone() } else { output };
            let report = tag_file(&tagger, input.as_deref(), destination.as_deref())?;

            if json_summary {
                print_json_summary(tagger.params(), &report)?;
            } else if summary {
                print_summary(tagger.params(), &report);
            }
        }
        Commands::Url { url } => {
            let tagger = build_tagger(&config, cli.tracking)?;
            println!("{}", tagger.tag_url(&url)?);
        }
        Commands::Find { input } => list_urls(input.as_deref())?,
    }

    Ok(())
}

fn build_tagger(config: &Config, tracking: TrackingArgs) -> Result<UtmTagger> {
    let params = config.tracking(tracking.source, tracking.medium, tracking.campaign)?;
    Ok(UtmTagger::new(params))
}

/// Reads a document from `path`, or stdin when no path is given.
fn read_document(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    Ok(document_text(bytes)?)
}

/// Writes a document to `path`, or stdout when no path is given.
fn write_document(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}

fn tag_file(
    tagger: &UtmTagger,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<TaggingReport> {
    let text = read_document(input)?;
    let tagged = tagger.tag_document(&text);
    write_document(output, &tagged.text)?;
    Ok(tagged.report)
}

fn list_urls(input: Option<&Path>) -> Result<()> {
    let text = read_document(input)?;

    for url in find_urls(&text) {
        let image = UrlParts::parse(url).is_ok_and(|parts| is_image(parts.path));
        let kind = if image {
            "image".dimmed()
        } else {
            "link ".green()
        };
        println!("{kind} {url}");
    }

    Ok(())
}

fn print_summary(params: &TrackingParams, report: &TaggingReport) {
    eprintln!("{}", "UTM tagging summary".bright_blue().bold());
    eprintln!(
        "  Tracking:        {}={} {}={} {}={}",
        "source".bright_white(),
        params.source.cyan(),
        "medium".bright_white(),
        params.medium.cyan(),
        "campaign".bright_white(),
        params.campaign.cyan()
    );
    eprintln!("  URLs found:      {}", report.urls_found);
    eprintln!("  Distinct URLs:   {}", report.distinct_urls);
    eprintln!("  Tagged:          {}", report.tagged.to_string().green());
    eprintln!("  Images skipped:  {}", report.skipped_images);

    if report.skipped_invalid > 0 {
        eprintln!(
            "  Invalid skipped: {}",
            report.skipped_invalid.to_string().yellow()
        );
    }
}

fn print_json_summary(params: &TrackingParams, report: &TaggingReport) -> Result<()> {
    let summary = Summary {
        tracking: params,
        report,
    };
    eprintln!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
