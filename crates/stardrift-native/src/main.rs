use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use clap::Parser;
use stardrift_core::render::GpuState;
use stardrift_core::{
    assets, build_text, launch, FrameOutcome, Launch, SceneConfig, Typeface, Unsupported,
    Viewport,
};
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

#[derive(Parser, Debug)]
#[command(name = "stardrift", version, about = "Drifting stars and a traveling light")]
struct Cli {
    /// Scene config as JSON. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the typeface file.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Star field seed. Taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!("stardrift-native starting (seed {seed})");

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title("stardrift")
        .with_inner_size(PhysicalSize::new(cli.width, cli.height))
        .build(&event_loop)
        .context("creating window")?;

    let size = window.inner_size();
    let viewport = Viewport::new(size.width, size.height);
    let renderer = probe_renderer(&window, viewport);

    let mut driver = match launch(&config, seed, viewport, renderer)? {
        Launch::Started(driver) => driver,
        Launch::Fallback(unsupported) => anyhow::bail!(unsupported.message()),
    };

    let fonts = spawn_font_loader(cli.assets.join(assets::FONT));
    let max_frames = cli.max_frames;
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            driver.resize(Viewport::new(size.width, size.height));
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            driver.stop();
            elwt.exit();
        }
        Event::AboutToWait => {
            if let Ok(font) = fonts.try_recv() {
                let text_config = driver.scene().config().text.clone();
                let mesh = build_text(&font, &text_config);
                driver.scene_mut().insert_text(mesh);
                log::info!("[font] {} loaded", font.family_name().unwrap_or(assets::FONT));
            }
            match driver.frame() {
                Ok(FrameOutcome::Continue) => {
                    if max_frames.is_some_and(|max| driver.frames() >= max) {
                        driver.stop();
                    }
                    window.request_redraw();
                }
                Ok(FrameOutcome::Stopped) => {
                    log::info!("[frame] stopped after {} frames", driver.frames());
                    elwt.exit();
                }
                Err(e) => {
                    log::error!("[frame] {e}");
                    elwt.exit();
                }
            }
        }
        _ => {}
    })?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SceneConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn probe_renderer(window: &Window, viewport: Viewport) -> Result<GpuState<'_>, Unsupported> {
    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(window)
        .map_err(|e| Unsupported::new(format!("create_surface error: {e}")))?;
    pollster::block_on(GpuState::new(
        &instance,
        surface,
        viewport.width,
        viewport.height,
    ))
}

/// Read and parse the typeface off the event loop thread. A missing or
/// malformed file is logged and the scene stays without text.
fn spawn_font_loader(path: PathBuf) -> mpsc::Receiver<Typeface> {
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("font-loader".into())
        .spawn(move || {
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::debug!("[font] {}: {e}", path.display());
                    return;
                }
            };
            match Typeface::from_json(&bytes) {
                Ok(font) => {
                    _ = tx.send(font);
                }
                Err(e) => log::debug!("[font] {}: {e}", path.display()),
            }
        });
    if let Err(e) = spawned {
        log::debug!("[font] loader thread not started: {e}");
    }
    rx
}
