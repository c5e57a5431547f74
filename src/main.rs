use std::path::PathBuf;
use std::time::Duration;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use photo_carousel::booking::{self, BookingForm, DateConstraint};
use photo_carousel::cli::{init_tracing, TimingArgs};
use photo_carousel::constants::*;
use photo_carousel::gallery::load_sorted_image_paths;
use photo_carousel::simulate::{self, parse_script, ConsoleView};
use photo_carousel::SlideView;

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Photo carousel playback and booking form checks")]
struct Cli {
    /// Log every slide and timer transition
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a carousel on virtual time and report what it showed
    Simulate {
        /// Use the photos in this directory as slides
        #[arg(long, conflicts_with = "slides")]
        dir: Option<PathBuf>,

        /// Number of placeholder slides when no directory is given
        #[arg(long, default_value_t = 3)]
        slides: usize,

        /// Virtual time to play, in milliseconds
        #[arg(long, default_value_t = 12_000)]
        duration_ms: u64,

        /// Frame step, in milliseconds
        #[arg(long, default_value_t = (FRAME_TIME * 1000.0) as u64)]
        frame_ms: u64,

        /// Button presses, e.g. "next@3000,prev@7500"
        #[arg(long, default_value = "")]
        script: String,

        #[command(flatten)]
        timing: TimingArgs,
    },
    /// Check booking form values the way the contact page does
    Validate {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Requested session date (YYYY-MM-DD), must not be in the past
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Simulate { dir, slides, duration_ms, frame_ms, script, timing } => {
            let view = match dir {
                Some(dir) => {
                    let paths = load_sorted_image_paths(&dir)
                        .with_context(|| format!("Error loading images from '{}'", dir.display()))?;
                    let names = paths
                        .iter()
                        .map(|p| p.file_name().unwrap_or(p.as_os_str()).to_string_lossy().into_owned())
                        .collect();
                    ConsoleView::new(names)
                }
                None => ConsoleView::numbered(slides),
            };
            let script = parse_script(&script).context("Invalid navigation script")?;

            info!(slides = view.slide_count(), duration_ms, "Starting simulation");
            let report = simulate::run(
                view,
                timing.config(),
                &script,
                Duration::from_millis(duration_ms),
                Duration::from_millis(frame_ms),
            );

            println!("Automatic advances: {}", report.auto_advances);
            println!("Manual navigations: {}", report.manual_navigations);
            match report.final_index {
                Some(index) => println!("Final slide: {}", index),
                None => println!("No slides, carousel inactive"),
            }
            println!(
                "History: {}",
                report.history.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" -> ")
            );
        }
        Command::Validate { name, email, date } => {
            let validation = booking::validate(&BookingForm { name, email });
            let date = match date {
                Some(date) => DateConstraint::today().check(&date).map_err(|e| e.to_string()),
                None => Ok(None),
            };

            match (validation.summary(), date) {
                (None, Ok(_)) => {
                    println!("{}", booking::SUCCESS_TITLE);
                    println!("{}", booking::SUCCESS_BODY);
                }
                (summary, date) => {
                    if let Some(summary) = summary {
                        eprintln!("{}", summary);
                    }
                    if let Err(message) = date {
                        eprintln!("{}", message);
                    }
                    bail!("Booking request rejected");
                }
            }
        }
    }

    Ok(())
}
