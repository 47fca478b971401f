#![cfg(target_arch = "wasm32")]
use stardrift_core::render::GpuState;
use stardrift_core::{Launch, SceneConfig, Unsupported, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod font;
mod frame;

thread_local! {
    static DRIVER: RefCell<Option<frame::SharedDriver>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stardrift-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop requesting animation frames. The current frame, if any, finishes.
#[wasm_bindgen]
pub fn stop_animation() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow().as_ref() {
            driver.borrow().stop();
        }
    });
}

/// Restart a stopped animation from where it left off.
#[wasm_bindgen]
pub fn resume_animation() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow().as_ref() {
            driver.borrow().start();
            frame::start_loop(driver.clone());
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SceneConfig::default();
    let viewport = dom::viewport_size(&window);
    let canvas = dom::attach_canvas(&document)?;
    dom::size_canvas(&canvas, viewport);

    let renderer = probe_renderer(&window, &canvas, viewport).await;
    let seed: u64 = rand::random();
    let launched = stardrift_core::launch(&config, seed, viewport, renderer)?;

    match launched {
        Launch::Fallback(unsupported) => {
            canvas.remove();
            dom::show_fallback(&document, &unsupported.message());
        }
        Launch::Started(driver) => {
            let driver = Rc::new(RefCell::new(driver));
            dom::wire_resize(driver.clone(), canvas);
            font::spawn_font_load(driver.clone());
            frame::start_loop(driver.clone());
            DRIVER.with(|d| *d.borrow_mut() = Some(driver));
        }
    }
    Ok(())
}

async fn probe_renderer(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    viewport: Viewport,
) -> Result<GpuState<'static>, Unsupported> {
    if !dom::has_webgpu(window) {
        return Err(Unsupported::new("navigator.gpu is not available"));
    }
    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| Unsupported::new(format!("create_surface error: {e}")))?;
    GpuState::new(&instance, surface, viewport.width, viewport.height).await
}
