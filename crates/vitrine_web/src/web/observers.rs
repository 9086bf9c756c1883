use std::rc::Rc;

use vitrine::config::ObserverOptions;
use vitrine::{PageEvent, Result, Watcher};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::js_err;
use super::Shell;

pub(super) fn create(
    shell: &Rc<Shell>,
    watcher: Watcher,
    options: &ObserverOptions,
) -> Result<web_sys::IntersectionObserver> {
    let shell = shell.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let Some(node) = shell.nodes.find(&entry.target()) else {
                    continue;
                };
                shell.dispatch(
                    PageEvent::Intersection {
                        watcher,
                        node,
                        intersecting: entry.is_intersecting(),
                    },
                    None,
                );
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    cb.forget();
    tracing::debug!(?watcher, margin = %options.root_margin, "observer created");
    Ok(observer)
}
