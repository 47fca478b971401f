use crate::frame::SharedDriver;
use stardrift_core::{assets, build_text, Typeface};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch the typeface and add the text once it arrives. A failed fetch or a
/// malformed font leaves the scene without text.
pub fn spawn_font_load(driver: SharedDriver) {
    spawn_local(async move {
        let url = assets::resolve("", assets::FONT);
        let bytes = match fetch_bytes(&url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("[font] {url}: {e}");
                return;
            }
        };
        let font = match Typeface::from_json(&bytes) {
            Ok(font) => font,
            Err(e) => {
                log::debug!("[font] {url}: {e}");
                return;
            }
        };
        let mut driver = driver.borrow_mut();
        let text_config = driver.scene().config().text.clone();
        let mesh = build_text(&font, &text_config);
        driver.scene_mut().insert_text(mesh);
        log::info!(
            "[font] {} loaded",
            font.family_name().unwrap_or(assets::FONT)
        );
    });
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
