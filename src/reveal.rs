//! One-shot reveal-on-scroll.
//!
//! Each element moves `Watching -> Revealed` on its first intersecting report
//! and is unobserved in the same step. Revealed is terminal: later reports for
//! the element (the observer may still deliver a batch queued before the
//! unobserve) produce nothing.

use hashbrown::HashMap;

use crate::config::ObserverOptions;
use crate::page::{Effect, NodeId, PageQuery, Watcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Watching,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct RevealWatcher {
    watcher: Watcher,
    options: ObserverOptions,
    class: String,
    copy_delay: bool,
    nodes: HashMap<NodeId, RevealState>,
}

impl RevealWatcher {
    /// `copy_delay` carries an inline `animation-delay` over to
    /// `transition-delay` so staggered CSS keeps its order.
    pub fn new(
        watcher: Watcher,
        options: ObserverOptions,
        class: impl Into<String>,
        copy_delay: bool,
    ) -> Self {
        Self {
            watcher,
            options,
            class: class.into(),
            copy_delay,
            nodes: HashMap::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    #[cfg(test)]
    pub(crate) fn state(&self, node: NodeId) -> Option<RevealState> {
        self.nodes.get(&node).copied()
    }

    /// Starts watching every node; nodes already known are skipped.
    pub fn observe(&mut self, nodes: impl IntoIterator<Item = NodeId>) -> Vec<Effect> {
        let mut out = Vec::new();
        for node in nodes {
            if self.nodes.contains_key(&node) {
                continue;
            }
            self.nodes.insert(node, RevealState::Watching);
            out.push(Effect::Observe {
                watcher: self.watcher,
                node,
            });
        }
        out
    }

    pub fn on_intersection(
        &mut self,
        node: NodeId,
        intersecting: bool,
        page: &impl PageQuery,
    ) -> Vec<Effect> {
        if !intersecting {
            return Vec::new();
        }
        if self.nodes.get(&node) != Some(&RevealState::Watching) {
            return Vec::new();
        }
        self.nodes.insert(node, RevealState::Revealed);

        let mut out = Vec::with_capacity(3);
        if self.copy_delay {
            let delay = page
                .inline_style(node, "animation-delay")
                .unwrap_or_else(|| "0s".to_string());
            out.push(Effect::set_style(node, "transition-delay", delay));
        }
        out.push(Effect::AddClass {
            node,
            class: self.class.clone(),
        });
        out.push(Effect::Unobserve {
            watcher: self.watcher,
            node,
        });
        out
    }
}
