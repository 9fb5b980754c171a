use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// A failed asset degrades to a small square so its entity stays
// geometrically valid.
pub const PLACEHOLDER_SIZE: f32 = 16.0;

// Watchdog: a source that hasn't resolved by now counts as failed.
const LOAD_TIMEOUT_MS: i32 = 8_000;

/// Result of one asset load. The simulation only needs natural dimensions at
/// spawn time and a drawable at render time, so decode failure is not an
/// error, just a placeholder.
pub enum ImageAsset {
    Ready(web::HtmlImageElement),
    Placeholder,
}

impl ImageAsset {
    pub fn natural_size(&self) -> (f32, f32) {
        match self {
            Self::Ready(img) => (img.natural_width() as f32, img.natural_height() as f32),
            Self::Placeholder => (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE),
        }
    }
}

/// Load `src`, racing decode against the watchdog. Never fails: decode
/// errors and timeouts both resolve to [`ImageAsset::Placeholder`].
pub async fn load(src: &str) -> ImageAsset {
    let Ok(img) = web::HtmlImageElement::new() else {
        return ImageAsset::Placeholder;
    };
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    let timeout = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, LOAD_TIMEOUT_MS);
        }
    });
    img.set_src(src);

    let race = js_sys::Promise::race(&js_sys::Array::of2(&loaded, &timeout));
    match JsFuture::from(race).await {
        // The watchdog resolves the race too; only a completed decode counts.
        Ok(_) if img.complete() && img.natural_width() > 0 => {
            log::info!(
                "[assets] loaded {src} ({}x{})",
                img.natural_width(),
                img.natural_height()
            );
            ImageAsset::Ready(img)
        }
        _ => {
            log::warn!("[assets] {src} failed or timed out, using placeholder");
            ImageAsset::Placeholder
        }
    }
}
