use vitrine::{Error, NodeId, PageQuery, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn js_err(v: JsValue) -> Error {
    Error::Browser(v.as_string().unwrap_or_else(|| format!("{v:?}")))
}

/// Maps the ids handed to the site back to live elements.
#[derive(Default)]
pub(super) struct NodeRegistry {
    nodes: Vec<web_sys::Element>,
}

impl NodeRegistry {
    /// Registering the same element twice returns the same id.
    pub(super) fn register(&mut self, el: web_sys::Element) -> NodeId {
        if let Some(id) = self.find(&el) {
            return id;
        }
        self.nodes.push(el);
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub(super) fn find(&self, el: &web_sys::Element) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n == el)
            .map(|i| NodeId(i as u32))
    }

    pub(super) fn get(&self, node: NodeId) -> Result<&web_sys::Element> {
        self.nodes
            .get(node.0 as usize)
            .ok_or_else(|| Error::Browser(format!("unknown node {node:?}")))
    }

    pub(super) fn html(&self, node: NodeId) -> Result<&web_sys::HtmlElement> {
        self.get(node)?
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or_else(|| Error::Browser(format!("{node:?} has no inline style")))
    }

    /// Name/value pairs of a form's string fields; file inputs are skipped.
    pub(super) fn form_fields(&self, form: NodeId) -> Vec<(String, String)> {
        let Some(form) = self
            .get(form)
            .ok()
            .and_then(|el| el.dyn_ref::<web_sys::HtmlFormElement>())
        else {
            return Vec::new();
        };
        let Ok(data) = web_sys::FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }
}

/// Live reads for the site, borrowed for the duration of one dispatch.
pub(super) struct DomPage<'a> {
    window: &'a web_sys::Window,
    document: &'a web_sys::Document,
    nodes: &'a NodeRegistry,
}

impl<'a> DomPage<'a> {
    pub(super) fn new(
        window: &'a web_sys::Window,
        document: &'a web_sys::Document,
        nodes: &'a NodeRegistry,
    ) -> Self {
        Self {
            window,
            document,
            nodes,
        }
    }
}

impl PageQuery for DomPage<'_> {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.nodes
            .html(node)
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or(0.0)
    }

    fn selector_top(&self, selector: &str) -> Option<f64> {
        // An invalid selector throws a SyntaxError; treat it as "no match".
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn inline_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes
            .html(node)
            .ok()?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn text(&self, node: NodeId) -> String {
        self.nodes
            .get(node)
            .ok()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }
}
