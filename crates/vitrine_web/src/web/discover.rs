use vitrine::config::Selectors;
use vitrine::{Error, FormNodes, PageLayout, Result};
use wasm_bindgen::JsCast;

use super::dom::NodeRegistry;

pub(super) struct Discovered {
    pub(super) layout: PageLayout,
    pub(super) nodes: NodeRegistry,
    /// Only listened to, never handed to the site.
    pub(super) mobile_links: Vec<web_sys::Element>,
    pub(super) anchors: Vec<web_sys::Element>,
}

/// Finds every element the controllers need.
///
/// Header, menu trigger and menu panel are required; anything else may be
/// absent and simply leaves its feature off.
pub(super) fn discover(document: &web_sys::Document, sel: &Selectors) -> Result<Discovered> {
    let mut nodes = NodeRegistry::default();

    let header = nodes.register(required(document, &sel.header_id)?);
    let menu_button = nodes.register(required(document, &sel.menu_button_id)?);
    let menu_panel = nodes.register(required(document, &sel.menu_panel_id)?);
    let body = document
        .body()
        .ok_or_else(|| Error::MissingElement("body".to_string()))?;
    let body = nodes.register(body.into());

    let scroll_indicator = document
        .get_element_by_id(&sel.scroll_indicator_id)
        .map(|el| nodes.register(el));
    let projects = document
        .get_element_by_id(&sel.projects_id)
        .map(|el| nodes.register(el));

    let reveal = register_all(&mut nodes, query_all(document, &sel.reveal));
    let cards = register_all(&mut nodes, query_all(document, &sel.cards));
    let project_cards = register_all(&mut nodes, query_all(document, &sel.project_cards));
    let reduced_motion = register_all(&mut nodes, query_all(document, &sel.reduced_motion));

    let mut forms = Vec::new();
    for id in &sel.form_ids {
        let Some(form) = document.get_element_by_id(id) else {
            continue;
        };
        if form.dyn_ref::<web_sys::HtmlFormElement>().is_none() {
            tracing::warn!(id = %id, "element is not a form; skipped");
            continue;
        }
        let button = form
            .query_selector(&sel.submit_button)
            .ok()
            .flatten()
            .map(|el| nodes.register(el));
        forms.push(FormNodes {
            form: nodes.register(form),
            button,
        });
    }

    let lazy_images = query_all(document, &sel.lazy_images)
        .into_iter()
        .filter_map(|img| {
            let src = img.get_attribute(&sel.deferred_src_attr)?;
            Some((nodes.register(img), src))
        })
        .collect();

    let hero_image = document
        .query_selector(&sel.hero_image)
        .ok()
        .flatten()
        .map(|el| nodes.register(el));

    let layout = PageLayout {
        header,
        menu_button,
        menu_panel,
        body,
        scroll_indicator,
        projects,
        reveal,
        cards,
        forms,
        lazy_images,
        hero_image,
        project_cards,
        reduced_motion,
    };
    tracing::debug!(
        reveal = layout.reveal.len(),
        cards = layout.cards.len(),
        forms = layout.forms.len(),
        images = layout.lazy_images.len(),
        "page discovered"
    );

    Ok(Discovered {
        layout,
        nodes,
        mobile_links: query_all(document, &sel.mobile_links),
        anchors: query_all(document, &sel.anchors),
    })
}

fn required(document: &web_sys::Document, id: &str) -> Result<web_sys::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => {
            tracing::warn!(selector, "invalid selector; nothing matched");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn register_all(
    nodes: &mut NodeRegistry,
    elements: Vec<web_sys::Element>,
) -> Vec<vitrine::NodeId> {
    elements.into_iter().map(|el| nodes.register(el)).collect()
}
