use std::path::PathBuf;
use std::process;

use clap::Parser;

use faceveil_core::compositing::blur_filter::{BlurEffect, EdgeMode, DEFAULT_BLUR_RADIUS};
use faceveil_core::compositing::infrastructure::cpu_canvas::CpuCanvas;
use faceveil_core::masking::mask_builder::FallbackPolicy;
use faceveil_core::pipeline::event_sink::LogEventSink;
use faceveil_core::pipeline::session::{PrivacySession, SessionConfig};
use faceveil_core::shared::frame::Frame;

mod detections;

use detections::ReplayDetector;

/// Blur faces in an image from precomputed detection records.
#[derive(Parser)]
#[command(name = "faceveil")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Detection records file (JSON: bounding boxes + optional contours).
    detections: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Blur radius in pixels.
    #[arg(long, default_value_t = DEFAULT_BLUR_RADIUS)]
    blur_radius: f64,

    /// Edge tiling mode for blur sampling: repeat, clamp, mirror, decal.
    #[arg(long, default_value = "repeat")]
    edge_mode: String,

    /// Drop faces without contour data instead of ellipse fallback.
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let edge_mode = parse_edge_mode(&cli.edge_mode)?;
    let detector = ReplayDetector::from_file(&cli.detections)?;

    let image = image::open(&cli.input)?.into_rgb8();
    let (width, height) = image.dimensions();
    let frame = Frame::new(image.into_raw(), width, height, 3, 0);

    let config = SessionConfig {
        blur: BlurEffect {
            radius_x: cli.blur_radius,
            radius_y: cli.blur_radius,
            edge_mode,
        },
        fallback: if cli.strict {
            FallbackPolicy::Drop
        } else {
            FallbackPolicy::InscribedEllipse
        },
        ..SessionConfig::default()
    };

    let mut session = PrivacySession::new(Box::new(detector), config, Box::new(LogEventSink));
    let mut canvas = CpuCanvas::new(frame.clone());
    session.process_frame(&frame, &mut canvas)?;

    let target = canvas.into_target();
    let out = image::RgbImage::from_raw(width, height, target.data().to_vec())
        .ok_or("output buffer size mismatch")?;
    out.save(&cli.output)?;

    log::info!("wrote {}", cli.output.display());
    Ok(())
}

fn parse_edge_mode(name: &str) -> Result<EdgeMode, String> {
    match name {
        "repeat" => Ok(EdgeMode::Repeat),
        "clamp" => Ok(EdgeMode::Clamp),
        "mirror" => Ok(EdgeMode::Mirror),
        "decal" => Ok(EdgeMode::Decal),
        other => Err(format!(
            "unknown edge mode '{other}' (expected repeat, clamp, mirror, or decal)"
        )),
    }
}
