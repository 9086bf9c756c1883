use crate::page::{Effect, NodeId};

/// Mobile navigation panel.
///
/// `open` is the only state; the `active` class on button and panel and the
/// body scroll lock are written from it in [`MobileMenu::toggle`], and every
/// other closer goes through `toggle` so the two markers cannot drift apart.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    button: NodeId,
    panel: NodeId,
    body: NodeId,
    class: String,
    open: bool,
}

impl MobileMenu {
    pub fn new(button: NodeId, panel: NodeId, body: NodeId, class: impl Into<String>) -> Self {
        Self {
            button,
            panel,
            body,
            class: class.into(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        let class = self.class.clone();
        let mut out = Vec::with_capacity(3);
        for node in [self.button, self.panel] {
            out.push(if self.open {
                Effect::AddClass {
                    node,
                    class: class.clone(),
                }
            } else {
                Effect::RemoveClass {
                    node,
                    class: class.clone(),
                }
            });
        }
        out.push(if self.open {
            Effect::set_style(self.body, "overflow", "hidden")
        } else {
            Effect::clear_style(self.body, "overflow")
        });
        tracing::trace!(open = self.open, "mobile menu toggled");
        out
    }

    /// A navigation link inside the panel was followed.
    pub fn on_link(&mut self) -> Vec<Effect> {
        self.close()
    }

    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" {
            self.close()
        } else {
            Vec::new()
        }
    }

    fn close(&mut self) -> Vec<Effect> {
        if self.open {
            self.toggle()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: NodeId = NodeId(1);
    const PANEL: NodeId = NodeId(2);
    const BODY: NodeId = NodeId(3);

    fn menu() -> MobileMenu {
        MobileMenu::new(BUTTON, PANEL, BODY, "active")
    }

    #[test]
    fn open_marks_both_and_locks_body() {
        let mut m = menu();
        let fx = m.toggle();
        assert!(m.is_open());
        assert_eq!(
            fx,
            vec![
                Effect::AddClass {
                    node: BUTTON,
                    class: "active".into()
                },
                Effect::AddClass {
                    node: PANEL,
                    class: "active".into()
                },
                Effect::SetStyle {
                    node: BODY,
                    property: "overflow",
                    value: "hidden".into()
                },
            ]
        );
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut m = menu();
        m.toggle();
        let fx = m.toggle();
        assert!(!m.is_open());
        assert!(fx.contains(&Effect::RemoveClass {
            node: BUTTON,
            class: "active".into()
        }));
        assert!(fx.contains(&Effect::RemoveClass {
            node: PANEL,
            class: "active".into()
        }));
        assert!(fx.contains(&Effect::SetStyle {
            node: BODY,
            property: "overflow",
            value: String::new()
        }));
    }

    #[test]
    fn links_close_only_when_open() {
        let mut m = menu();
        assert!(m.on_link().is_empty());
        assert!(!m.is_open());

        m.toggle();
        assert_eq!(m.on_link().len(), 3);
        assert!(!m.is_open());
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut m = menu();
        m.toggle();
        assert!(m.on_key("Enter").is_empty());
        assert!(m.is_open());
        assert!(!m.on_key("Escape").is_empty());
        assert!(!m.is_open());
        assert!(m.on_key("Escape").is_empty());
    }
}
