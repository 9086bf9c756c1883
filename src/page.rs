//! The seam between controllers and the DOM.
//!
//! Controllers never hold DOM handles. They receive [`PageEvent`]s, read what
//! they need through [`PageQuery`], and answer with a list of [`Effect`]s that
//! the web shell applies to the real elements.

/// Opaque handle to an element registered by the shell at discovery time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Which intersection observer an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Watcher {
    Reveal,
    Cards,
    LazyImages,
}

/// Deferred work the shell must feed back as [`PageEvent::Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ConfirmSubmit { form: NodeId },
    RestoreSubmit { form: NodeId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll,
    MenuButtonClick,
    MobileLinkClick,
    KeyDown { key: String },
    AnchorClick { href: String },
    ScrollIndicatorClick,
    Intersection { watcher: Watcher, node: NodeId, intersecting: bool },
    Submit { form: NodeId, fields: Vec<(String, String)> },
    PointerEnter { node: NodeId },
    PointerLeave { node: NodeId },
    Timer(Task),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass { node: NodeId, class: String },
    RemoveClass { node: NodeId, class: String },
    /// An empty `value` removes the inline property.
    SetStyle { node: NodeId, property: &'static str, value: String },
    SetText { node: NodeId, text: String },
    SetDisabled { node: NodeId, disabled: bool },
    SetAttribute { node: NodeId, name: &'static str, value: String },
    ResetForm { node: NodeId },
    ScrollTo { top: f64 },
    ScrollIntoView { node: NodeId },
    Observe { watcher: Watcher, node: NodeId },
    Unobserve { watcher: Watcher, node: NodeId },
    Schedule { delay_ms: u32, task: Task },
    PreventDefault,
    ConsoleStyled { text: String, css: String },
}

impl Effect {
    pub(crate) fn set_style(node: NodeId, property: &'static str, value: impl Into<String>) -> Self {
        Effect::SetStyle {
            node,
            property,
            value: value.into(),
        }
    }

    pub(crate) fn clear_style(node: NodeId, property: &'static str) -> Self {
        Effect::SetStyle {
            node,
            property,
            value: String::new(),
        }
    }
}

/// Synchronous reads a controller may need while handling an event.
pub trait PageQuery {
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Rendered height of an element (`offsetHeight`).
    fn offset_height(&self, node: NodeId) -> f64;

    /// Viewport-relative top of the first element matching `selector`.
    ///
    /// Returns `None` both when nothing matches and when the selector is not
    /// valid CSS.
    fn selector_top(&self, selector: &str) -> Option<f64>;

    /// Inline style value of `property` on `node`, `None` if unset or empty.
    fn inline_style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Text content of `node`.
    fn text(&self, node: NodeId) -> String;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::{NodeId, PageQuery};

    /// In-memory stand-in for the browser used by unit tests.
    #[derive(Default)]
    pub(crate) struct FakePage {
        pub(crate) scroll_y: f64,
        pub(crate) heights: HashMap<NodeId, f64>,
        pub(crate) selectors: HashMap<String, f64>,
        pub(crate) styles: HashMap<(NodeId, String), String>,
        pub(crate) texts: HashMap<NodeId, String>,
    }

    impl PageQuery for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn offset_height(&self, node: NodeId) -> f64 {
            self.heights.get(&node).copied().unwrap_or(0.0)
        }

        fn selector_top(&self, selector: &str) -> Option<f64> {
            self.selectors.get(selector).copied()
        }

        fn inline_style(&self, node: NodeId, property: &str) -> Option<String> {
            self.styles
                .get(&(node, property.to_string()))
                .filter(|v| !v.is_empty())
                .cloned()
        }

        fn text(&self, node: NodeId) -> String {
            self.texts.get(&node).cloned().unwrap_or_default()
        }
    }
}
