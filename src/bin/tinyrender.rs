//! tinyrender: spin a flat-shaded OBJ mesh.
//!
//! Renders headless into memory or PNG frames, or into a window when built
//! with `--features window`.
//!
//! Run: `RUST_LOG=info tinyrender assets/head.obj --output frames --frames 30`

use anyhow::{Context, Result};
use clap::Parser;
use std::f64::consts::PI;
use std::path::PathBuf;
use std::time::Duration;
use tiny_raster::prelude::*;

/// Software rasterizer demo
#[derive(Parser, Debug)]
#[command(name = "tinyrender")]
#[command(version)]
#[command(about = "Spin a flat-shaded OBJ mesh with a CPU rasterizer", long_about = None)]
struct Cli {
    /// Wavefront OBJ mesh to render
    mesh: PathBuf,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to render (headless default: 60, window default: until closed)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Write every frame as a PNG into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw face edges instead of shaded faces
    #[arg(long)]
    wireframe: bool,

    /// Triangle fill strategy: scanline or barycentric
    #[arg(long)]
    fill: Option<FillStrategy>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// PNG image composited at the top-left of every frame
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Present in a window
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

const HEADLESS_FRAMES: u64 = 60;

/// Per-run state shared by the headless and windowed loops.
struct Demo {
    mesh: Mesh,
    rasterizer: Rasterizer,
    mode: RenderMode,
    reporter: FrameReporter,
    rotation_period: Option<Duration>,
}

impl Demo {
    fn frame<S: PresentationSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.reporter.start_frame();
        self.rasterizer.draw_mesh(&self.mesh, self.mode);
        self.rasterizer.render(sink)?;
        self.reporter.end_frame();

        if let Some(period) = self.rotation_period {
            let angle = 2.0 * PI * self.reporter.frame_time().as_secs_f64() / period.as_secs_f64();
            self.mesh.rotate_y(angle);
        }
        Ok(())
    }

    fn run_headless<S: PresentationSink + ?Sized>(&mut self, sink: &mut S, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.frame(sink)?;
        }
        Ok(())
    }

    #[cfg(feature = "window")]
    fn run_window(&mut self, sink: &mut WindowSink, frames: Option<u64>) -> Result<()> {
        let mut rendered = 0u64;
        while !sink.should_quit() && frames.map_or(true, |n| rendered < n) {
            let size = sink.size();
            self.rasterizer.resize_canvas(size.width, size.height);
            self.frame(sink)?;
            rendered += 1;
        }
        log::debug!("shutting down after {rendered} frames");
        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    if let Some(fill) = cli.fill {
        config.render.fill = fill;
    }
    if cli.wireframe {
        config.render.mode = RenderMode::Wireframe;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mesh = Mesh::load(&cli.mesh)
        .with_context(|| format!("failed to load mesh {}", cli.mesh.display()))?;

    let mut rasterizer = Rasterizer::from_config(&config);
    if let Some(path) = &cli.overlay {
        let overlay = Overlay::load_png(path)
            .with_context(|| format!("failed to load overlay {}", path.display()))?;
        rasterizer.draw_overlay(overlay);
    }

    let mut demo = Demo {
        mesh,
        rasterizer,
        mode: config.render.mode,
        reporter: FrameReporter::new(config.animation.report_every),
        rotation_period: config.rotation_period(),
    };

    #[cfg(feature = "window")]
    if cli.window {
        let size = Dimensions::new(config.window.width, config.window.height);
        let mut sink = WindowSink::new(&config.window.title, size)?;
        return demo.run_window(&mut sink, cli.frames);
    }

    let frames = cli.frames.unwrap_or(HEADLESS_FRAMES);
    match &cli.output {
        Some(dir) => {
            let mut sink = PngSink::new(dir, "frame")?;
            demo.run_headless(&mut sink, frames)?;
            log::info!("wrote {} frames to {}", sink.frames_written(), dir.display());
        }
        None => {
            let mut sink = CaptureSink::new();
            demo.run_headless(&mut sink, frames)?;
            log::info!("rendered {} frames", sink.frames());
        }
    }
    Ok(())
}
