use crate::page::{Effect, NodeId};

/// Lifts a project card above its neighbours while the pointer is over it.
#[derive(Debug, Clone)]
pub struct HoverLift {
    z_index: String,
}

impl HoverLift {
    pub fn new(z_index: i32) -> Self {
        Self {
            z_index: z_index.to_string(),
        }
    }

    pub fn on_enter(&self, card: NodeId) -> Effect {
        Effect::set_style(card, "z-index", self.z_index.clone())
    }

    pub fn on_leave(&self, card: NodeId) -> Effect {
        Effect::clear_style(card, "z-index")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_raises_leave_resets() {
        let h = HoverLift::new(10);
        assert_eq!(
            h.on_enter(NodeId(4)),
            Effect::SetStyle {
                node: NodeId(4),
                property: "z-index",
                value: "10".into()
            }
        );
        assert_eq!(
            h.on_leave(NodeId(4)),
            Effect::SetStyle {
                node: NodeId(4),
                property: "z-index",
                value: String::new()
            }
        );
    }
}
