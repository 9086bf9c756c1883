use crate::page::{Effect, NodeId};

static FINAL_STATE: [(&str, &str); 4] = [
    ("animation", "none"),
    ("transition", "none"),
    ("opacity", "1"),
    ("transform", "none"),
];

/// Pins animated elements to their end state for `prefers-reduced-motion`.
///
/// Evaluated once at startup; a preference change mid-session is not tracked.
pub fn reduce_motion(
    prefers_reduced: bool,
    nodes: impl IntoIterator<Item = NodeId>,
) -> Vec<Effect> {
    if !prefers_reduced {
        return Vec::new();
    }
    nodes
        .into_iter()
        .flat_map(|node| {
            FINAL_STATE
                .iter()
                .map(move |&(property, value)| Effect::set_style(node, property, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_preference_no_effects() {
        assert!(reduce_motion(false, [NodeId(1), NodeId(2)]).is_empty());
    }

    #[test]
    fn each_node_gets_final_styles() {
        let fx = reduce_motion(true, [NodeId(1), NodeId(2)]);
        assert_eq!(fx.len(), 8);
        assert!(fx.contains(&Effect::SetStyle {
            node: NodeId(2),
            property: "opacity",
            value: "1".into()
        }));
        assert!(fx.contains(&Effect::SetStyle {
            node: NodeId(1),
            property: "transform",
            value: "none".into()
        }));
    }
}
