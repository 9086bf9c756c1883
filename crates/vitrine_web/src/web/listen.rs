use vitrine::Result;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::js_err;

/// Adds a listener that lives as long as the page.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<()> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            cb.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}
