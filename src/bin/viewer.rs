use std::path::PathBuf;
use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};

use photo_carousel::cli::{init_tracing, TimingArgs};
use photo_carousel::constants::*;
use photo_carousel::gallery::load_sorted_image_paths;
use photo_carousel::viewer::{CarouselEngine, Engine};

/// Rotate through the photos of a directory
#[derive(Parser, Debug)]
#[command(name = "viewer", version)]
struct Args {
    /// Directory holding the photos
    image_directory: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    timing: TimingArgs,
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(message, 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let (mut rl, thread) = raylib::init()
        .size(1280, 720)
        .title("Photo Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let paths = match load_sorted_image_paths(&args.image_directory) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{}", e);
            show_error(&mut rl, &thread, &format!("Error: {}", e));
            return Ok(());
        }
    };

    let mut engine = CarouselEngine::new(args.timing.config());
    if !engine.initialize(&mut rl, &thread, paths) {
        error!("No slides were created successfully.");
        show_error(&mut rl, &thread, "Error: No slides loaded.");
        return Ok(());
    }
    info!("Viewer running, use the arrow keys or the on-screen buttons to navigate");

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        if !engine.frame(dt, &mut rl, &thread) {
            break;
        }
    }

    engine.shutdown();
    Ok(())
}
