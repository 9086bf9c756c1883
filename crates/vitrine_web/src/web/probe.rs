use vitrine::config::REDUCED_MOTION_QUERY;
use vitrine::{Capabilities, SiteConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Evaluated once at startup; none of these are watched for changes.
pub(super) fn capabilities(
    window: &web_sys::Window,
    document: &web_sys::Document,
    cfg: &SiteConfig,
) -> Capabilities {
    Capabilities {
        native_lazy_loading: native_lazy_loading(document),
        wide_viewport: media_matches(window, &cfg.parallax.media_query()),
        prefers_reduced_motion: media_matches(window, REDUCED_MOTION_QUERY),
    }
}

fn media_matches(window: &web_sys::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|m| m.matches())
}

/// `'loading' in HTMLImageElement.prototype`, asked through a throwaway `<img>`.
fn native_lazy_loading(document: &web_sys::Document) -> bool {
    let Ok(img) = document.create_element("img") else {
        return false;
    };
    js_sys::Reflect::has(img.unchecked_ref::<js_sys::Object>(), &JsValue::from_str("loading"))
        .unwrap_or(false)
}
