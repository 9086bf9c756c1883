use std::rc::Rc;

use vitrine::{PageEvent, Result, Task};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::js_err;
use super::Shell;

/// Fires `task` back into the site after `delay_ms`. Never cancelled.
pub(super) fn schedule(shell: &Rc<Shell>, delay_ms: u32, task: Task) -> Result<()> {
    let target = shell.clone();
    let cb = Closure::once_into_js(move || target.dispatch(PageEvent::Timer(task), None));
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    shell
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout)
        .map_err(js_err)?;
    Ok(())
}
