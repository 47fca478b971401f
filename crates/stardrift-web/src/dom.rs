use crate::frame::SharedDriver;
use stardrift_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const CANVAS_ID: &str = "app-canvas";
const FALLBACK_ID: &str = "fallback-message";

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn has_webgpu(window: &web::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Reuse `#app-canvas` when the page provides one, otherwise append a new
/// canvas to the body.
pub fn attach_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id(CANVAS_ID);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Backing store and CSS size both match the viewport.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1));
    canvas.set_height(viewport.height.max(1));
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

pub fn show_fallback(document: &web::Document, message: &str) {
    let Some(body) = document.body() else {
        log::error!("{message}");
        return;
    };
    if let Ok(el) = document.create_element("div") {
        el.set_id(FALLBACK_ID);
        el.set_text_content(Some(message));
        _ = el.set_attribute(
            "style",
            "font-family:monospace;font-size:13px;text-align:center;color:#fff;background:#000;padding:1.5em;width:400px;margin:5em auto 0",
        );
        _ = body.append_child(&el);
    }
}

pub fn wire_resize(driver: SharedDriver, canvas: web::HtmlCanvasElement) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = viewport_size(&window);
        if viewport.is_empty() {
            return;
        }
        size_canvas(&canvas, viewport);
        driver.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
