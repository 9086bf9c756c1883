use crate::page::{Effect, NodeId, PageQuery};

/// In-page anchor navigation with a header offset.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    header: NodeId,
}

impl SmoothScroll {
    pub fn new(header: NodeId) -> Self {
        Self { header }
    }

    /// A bare `#` keeps its default behavior. Anything else is taken over,
    /// and scrolls only if the selector resolves.
    pub fn on_click(&self, href: &str, page: &impl PageQuery) -> Vec<Effect> {
        if href == "#" {
            return Vec::new();
        }

        let mut out = vec![Effect::PreventDefault];
        match page.selector_top(href) {
            Some(top) => {
                let target = top + page.scroll_y() - page.offset_height(self.header);
                out.push(Effect::ScrollTo { top: target });
            }
            None => tracing::debug!(href, "anchor target not found"),
        }
        out
    }
}

/// The "scroll down" hint in the hero; jumps to the projects section.
#[derive(Debug, Clone)]
pub struct ScrollIndicator {
    target: Option<NodeId>,
}

impl ScrollIndicator {
    pub fn new(target: Option<NodeId>) -> Self {
        Self { target }
    }

    pub fn on_click(&self) -> Option<Effect> {
        self.target.map(|node| Effect::ScrollIntoView { node })
    }
}
