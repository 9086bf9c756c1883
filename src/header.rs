use crate::page::{Effect, NodeId};

/// Puts the header into its compact "scrolled" look once the page leaves the top.
#[derive(Debug, Clone)]
pub struct HeaderScroll {
    header: NodeId,
    class: String,
    threshold: f64,
    scrolled: bool,
}

impl HeaderScroll {
    pub fn new(header: NodeId, class: impl Into<String>, threshold: f64) -> Self {
        Self {
            header,
            class: class.into(),
            threshold,
            scrolled: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns an effect only when the applied state changes.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<Effect> {
        let want = scroll_y > self.threshold;
        if want == self.scrolled {
            return None;
        }
        self.scrolled = want;
        let node = self.header;
        let class = self.class.clone();
        Some(if want {
            Effect::AddClass { node, class }
        } else {
            Effect::RemoveClass { node, class }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderScroll {
        HeaderScroll::new(NodeId(1), "scrolled", 50.0)
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut h = header();
        assert_eq!(h.on_scroll(50.0), None);
        assert!(!h.is_scrolled());
        assert_eq!(
            h.on_scroll(50.5),
            Some(Effect::AddClass {
                node: NodeId(1),
                class: "scrolled".to_string()
            })
        );
        assert!(h.is_scrolled());
    }

    #[test]
    fn repeated_samples_on_one_side_are_no_ops() {
        let mut h = header();
        assert!(h.on_scroll(120.0).is_some());
        assert_eq!(h.on_scroll(400.0), None);
        assert_eq!(h.on_scroll(51.0), None);
        assert_eq!(
            h.on_scroll(0.0),
            Some(Effect::RemoveClass {
                node: NodeId(1),
                class: "scrolled".to_string()
            })
        );
        assert_eq!(h.on_scroll(10.0), None);
    }
}
