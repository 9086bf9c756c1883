use hashbrown::HashMap;

use crate::page::{Effect, NodeId, Watcher};

/// How deferred images get their `src`. Picked once from a capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// The browser understands `loading="lazy"`; hand it the source right away.
    Native,
    /// Wait for an intersection report per image.
    Observer,
}

impl LoadStrategy {
    pub fn detect(native_supported: bool) -> Self {
        if native_supported {
            LoadStrategy::Native
        } else {
            LoadStrategy::Observer
        }
    }
}

#[derive(Debug, Clone)]
pub struct LazyImages {
    strategy: LoadStrategy,
    pending: HashMap<NodeId, String>,
}

impl LazyImages {
    pub fn new(strategy: LoadStrategy) -> Self {
        Self {
            strategy,
            pending: HashMap::new(),
        }
    }

    pub fn strategy(&self) -> LoadStrategy {
        self.strategy
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn start(&mut self, images: impl IntoIterator<Item = (NodeId, String)>) -> Vec<Effect> {
        let mut out = Vec::new();
        for (node, src) in images {
            match self.strategy {
                LoadStrategy::Native => out.push(assign_src(node, src)),
                LoadStrategy::Observer => {
                    if self.pending.insert(node, src).is_none() {
                        out.push(Effect::Observe {
                            watcher: Watcher::LazyImages,
                            node,
                        });
                    }
                }
            }
        }
        tracing::debug!(strategy = ?self.strategy, effects = out.len(), "lazy images started");
        out
    }

    pub fn on_intersection(&mut self, node: NodeId, intersecting: bool) -> Vec<Effect> {
        if !intersecting {
            return Vec::new();
        }
        match self.pending.remove(&node) {
            Some(src) => vec![
                assign_src(node, src),
                Effect::Unobserve {
                    watcher: Watcher::LazyImages,
                    node,
                },
            ],
            None => Vec::new(),
        }
    }
}

fn assign_src(node: NodeId, value: String) -> Effect {
    Effect::SetAttribute {
        node,
        name: "src",
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<(NodeId, String)> {
        vec![
            (NodeId(1), "/img/a.jpg".into()),
            (NodeId(2), "/img/b.jpg".into()),
        ]
    }

    #[test]
    fn native_assigns_everything_up_front() {
        let mut l = LazyImages::new(LoadStrategy::detect(true));
        let fx = l.start(images());
        assert_eq!(
            fx,
            vec![
                Effect::SetAttribute {
                    node: NodeId(1),
                    name: "src",
                    value: "/img/a.jpg".into()
                },
                Effect::SetAttribute {
                    node: NodeId(2),
                    name: "src",
                    value: "/img/b.jpg".into()
                },
            ]
        );
        assert_eq!(l.pending(), 0);
        assert!(l.on_intersection(NodeId(1), true).is_empty());
    }

    #[test]
    fn fallback_resolves_each_image_once() {
        let mut l = LazyImages::new(LoadStrategy::detect(false));
        let fx = l.start(images());
        assert!(fx.iter().all(|e| matches!(e, Effect::Observe { watcher: Watcher::LazyImages, .. })));
        assert_eq!(l.pending(), 2);

        assert!(l.on_intersection(NodeId(2), false).is_empty());
        let fx = l.on_intersection(NodeId(2), true);
        assert_eq!(
            fx[0],
            Effect::SetAttribute {
                node: NodeId(2),
                name: "src",
                value: "/img/b.jpg".into()
            }
        );
        assert!(l.on_intersection(NodeId(2), true).is_empty());
        assert_eq!(l.pending(), 1);
    }
}
