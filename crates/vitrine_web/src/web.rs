use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use vitrine::{Effect, Error, PageEvent, Result, Site, SiteConfig, Watcher};
use wasm_bindgen::JsCast;

mod discover;
mod dom;
mod listen;
mod logging;
mod observers;
mod probe;
mod timers;

use dom::{js_err, DomPage, NodeRegistry};

/// Id of the optional inline `<script type="application/json">` holding a partial config.
const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Wires the page once the document is parsed.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let wired = listen::listen(&document, "DOMContentLoaded", false, move |_| boot());
        if let Err(e) = wired {
            web_sys::console::error_1(&e.to_string().into());
        }
    } else {
        boot();
    }
}

fn boot() {
    if let Err(e) = Shell::boot() {
        tracing::error!(error = %e, "page behaviors not started");
    }
}

pub(super) struct Shell {
    window: web_sys::Window,
    document: web_sys::Document,
    nodes: NodeRegistry,
    site: RefCell<Site>,
    observers: RefCell<HashMap<Watcher, web_sys::IntersectionObserver>>,
}

impl Shell {
    fn boot() -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Browser("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Browser("no document".to_string()))?;

        let (config, config_err) = load_config(&document);
        logging::init(&config.log_level);
        if let Some(e) = config_err {
            tracing::warn!(error = %e, "inline config ignored; using defaults");
        }

        let found = discover::discover(&document, &config.selectors)?;
        let caps = probe::capabilities(&window, &document, &config);

        let (site, startup) = {
            let page = DomPage::new(&window, &document, &found.nodes);
            Site::start(&config, found.layout.clone(), caps, &page)
        };

        let shell = Rc::new(Shell {
            window,
            document,
            nodes: found.nodes,
            site: RefCell::new(site),
            observers: RefCell::new(HashMap::new()),
        });
        shell.apply(startup, None);
        shell.wire(&found.layout, &found.mobile_links, &found.anchors)?;
        Ok(())
    }

    /// Routes one event through the site, then applies what it asked for.
    ///
    /// The site borrow ends before effects run, so an effect that re-enters
    /// `dispatch` synchronously is fine.
    pub(super) fn dispatch(self: &Rc<Self>, event: PageEvent, dom_event: Option<&web_sys::Event>) {
        let effects = {
            let page = DomPage::new(&self.window, &self.document, &self.nodes);
            self.site.borrow_mut().handle(event, &page)
        };
        self.apply(effects, dom_event);
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>, dom_event: Option<&web_sys::Event>) {
        for effect in effects {
            if let Err(e) = self.apply_one(effect, dom_event) {
                tracing::warn!(error = %e, "effect skipped");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect, dom_event: Option<&web_sys::Event>) -> Result<()> {
        match effect {
            Effect::AddClass { node, class } => {
                self.nodes.get(node)?.class_list().add_1(&class).map_err(js_err)
            }
            Effect::RemoveClass { node, class } => self
                .nodes
                .get(node)?
                .class_list()
                .remove_1(&class)
                .map_err(js_err),
            Effect::SetStyle {
                node,
                property,
                value,
            } => {
                let style = self.nodes.html(node)?.style();
                if value.is_empty() {
                    style.remove_property(property).map(|_| ()).map_err(js_err)
                } else {
                    style.set_property(property, &value).map_err(js_err)
                }
            }
            Effect::SetText { node, text } => {
                self.nodes.get(node)?.set_text_content(Some(&text));
                Ok(())
            }
            Effect::SetDisabled { node, disabled } => {
                let el = self.nodes.get(node)?;
                if let Some(button) = el.dyn_ref::<web_sys::HtmlButtonElement>() {
                    button.set_disabled(disabled);
                    Ok(())
                } else if disabled {
                    el.set_attribute("disabled", "").map_err(js_err)
                } else {
                    el.remove_attribute("disabled").map_err(js_err)
                }
            }
            Effect::SetAttribute { node, name, value } => {
                self.nodes.get(node)?.set_attribute(name, &value).map_err(js_err)
            }
            Effect::ResetForm { node } => {
                self.nodes
                    .get(node)?
                    .dyn_ref::<web_sys::HtmlFormElement>()
                    .ok_or_else(|| Error::Browser(format!("{node:?} is not a form")))?
                    .reset();
                Ok(())
            }
            Effect::ScrollTo { top } => {
                let opts = web_sys::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&opts);
                Ok(())
            }
            Effect::ScrollIntoView { node } => {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                self.nodes
                    .get(node)?
                    .scroll_into_view_with_scroll_into_view_options(&opts);
                Ok(())
            }
            Effect::Observe { watcher, node } => {
                let observer = self.observer(watcher)?;
                observer.observe(self.nodes.get(node)?);
                Ok(())
            }
            Effect::Unobserve { watcher, node } => {
                if let Some(observer) = self.observers.borrow().get(&watcher) {
                    observer.unobserve(self.nodes.get(node)?);
                }
                Ok(())
            }
            Effect::Schedule { delay_ms, task } => timers::schedule(self, delay_ms, task),
            Effect::PreventDefault => {
                if let Some(ev) = dom_event {
                    ev.prevent_default();
                }
                Ok(())
            }
            Effect::ConsoleStyled { text, css } => {
                web_sys::console::log_2(&text.into(), &css.into());
                Ok(())
            }
        }
    }

    /// One observer per watcher, created on first use with the site's options.
    fn observer(self: &Rc<Self>, watcher: Watcher) -> Result<web_sys::IntersectionObserver> {
        if let Some(observer) = self.observers.borrow().get(&watcher) {
            return Ok(observer.clone());
        }
        let options = self.site.borrow().observer_options(watcher).clone();
        let observer = observers::create(self, watcher, &options)?;
        self.observers
            .borrow_mut()
            .insert(watcher, observer.clone());
        Ok(observer)
    }

    fn wire(
        self: &Rc<Self>,
        layout: &vitrine::PageLayout,
        mobile_links: &[web_sys::Element],
        anchors: &[web_sys::Element],
    ) -> Result<()> {
        let shell = self.clone();
        listen::listen(&self.window, "scroll", true, move |_| {
            shell.dispatch(PageEvent::Scroll, None)
        })?;

        let shell = self.clone();
        listen::listen(self.nodes.get(layout.menu_button)?, "click", false, move |_| {
            shell.dispatch(PageEvent::MenuButtonClick, None)
        })?;

        for link in mobile_links {
            let shell = self.clone();
            listen::listen(link, "click", false, move |_| {
                shell.dispatch(PageEvent::MobileLinkClick, None)
            })?;
        }

        for anchor in anchors {
            let shell = self.clone();
            let el = anchor.clone();
            listen::listen(anchor, "click", false, move |ev| {
                let href = el.get_attribute("href").unwrap_or_default();
                shell.dispatch(PageEvent::AnchorClick { href }, Some(&ev))
            })?;
        }

        if let Some(indicator) = layout.scroll_indicator {
            let shell = self.clone();
            listen::listen(self.nodes.get(indicator)?, "click", false, move |_| {
                shell.dispatch(PageEvent::ScrollIndicatorClick, None)
            })?;
        }

        for f in &layout.forms {
            let form = f.form;
            let shell = self.clone();
            listen::listen(self.nodes.get(form)?, "submit", false, move |ev| {
                let fields = shell.nodes.form_fields(form);
                shell.dispatch(PageEvent::Submit { form, fields }, Some(&ev))
            })?;
        }

        for &node in &layout.project_cards {
            let el = self.nodes.get(node)?;
            let shell = self.clone();
            listen::listen(el, "mouseenter", false, move |_| {
                shell.dispatch(PageEvent::PointerEnter { node }, None)
            })?;
            let shell = self.clone();
            listen::listen(el, "mouseleave", false, move |_| {
                shell.dispatch(PageEvent::PointerLeave { node }, None)
            })?;
        }

        let shell = self.clone();
        listen::listen(&self.document, "keydown", false, move |ev| {
            if let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>().map(|k| k.key()) {
                shell.dispatch(PageEvent::KeyDown { key }, Some(&ev))
            }
        })?;

        Ok(())
    }
}

fn load_config(document: &web_sys::Document) -> (SiteConfig, Option<Error>) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw.as_deref().map(SiteConfig::from_json) {
        None => (SiteConfig::default(), None),
        Some(Ok(cfg)) => (cfg, None),
        Some(Err(e)) => (SiteConfig::default(), Some(e)),
    }
}
