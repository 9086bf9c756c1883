//! Cosmetic submit feedback for the lead forms.
//!
//! Nothing is sent anywhere. A submit walks the button through
//! `Idle -> Sending -> Confirmed -> Idle` on two timers; swapping the first
//! timer for a real request is where a backend would plug in.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::config::FormConfig;
use crate::page::{Effect, NodeId, PageQuery, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Confirmed,
}

pub type FormSnapshot = BTreeMap<String, String>;

#[derive(Debug, Clone)]
struct SubmitFeedback {
    button: Option<NodeId>,
    phase: FormPhase,
    original_label: String,
    last_snapshot: FormSnapshot,
}

#[derive(Debug, Clone)]
pub struct FormFeedback {
    cfg: FormConfig,
    forms: HashMap<NodeId, SubmitFeedback>,
}

impl FormFeedback {
    pub fn new(cfg: FormConfig) -> Self {
        Self {
            cfg,
            forms: HashMap::new(),
        }
    }

    pub fn register(&mut self, form: NodeId, button: Option<NodeId>) {
        self.forms.insert(
            form,
            SubmitFeedback {
                button,
                phase: FormPhase::Idle,
                original_label: String::new(),
                last_snapshot: FormSnapshot::new(),
            },
        );
    }

    #[cfg(test)]
    pub(crate) fn phase(&self, form: NodeId) -> Option<FormPhase> {
        self.forms.get(&form).map(|f| f.phase)
    }

    #[cfg(test)]
    pub(crate) fn last_snapshot(&self, form: NodeId) -> Option<&FormSnapshot> {
        self.forms.get(&form).map(|f| &f.last_snapshot)
    }

    pub fn on_submit(
        &mut self,
        form: NodeId,
        fields: Vec<(String, String)>,
        page: &impl PageQuery,
    ) -> Vec<Effect> {
        let mut out = vec![Effect::PreventDefault];
        let Some(state) = self.forms.get_mut(&form) else {
            return out;
        };
        if state.phase != FormPhase::Idle {
            tracing::debug!(?form, phase = ?state.phase, "submit ignored while busy");
            return out;
        }

        // Later duplicates of a field name win, like a plain object built from FormData.
        state.last_snapshot = fields.into_iter().collect();
        tracing::debug!(?form, fields = ?state.last_snapshot, "form submitted");

        let Some(button) = state.button else {
            tracing::warn!(?form, "form has no submit button; skipping feedback");
            return out;
        };

        state.original_label = page.text(button);
        state.phase = FormPhase::Sending;
        out.push(Effect::SetText {
            node: button,
            text: self.cfg.sending_label.clone(),
        });
        out.push(Effect::SetDisabled {
            node: button,
            disabled: true,
        });
        out.push(Effect::Schedule {
            delay_ms: self.cfg.confirm_delay_ms,
            task: Task::ConfirmSubmit { form },
        });
        out
    }

    pub fn on_task(&mut self, task: Task) -> Vec<Effect> {
        match task {
            Task::ConfirmSubmit { form } => self.confirm(form),
            Task::RestoreSubmit { form } => self.restore(form),
        }
    }

    fn confirm(&mut self, form: NodeId) -> Vec<Effect> {
        let Some(state) = self.forms.get_mut(&form) else {
            return Vec::new();
        };
        let (FormPhase::Sending, Some(button)) = (state.phase, state.button) else {
            return Vec::new();
        };
        state.phase = FormPhase::Confirmed;
        vec![
            Effect::SetText {
                node: button,
                text: self.cfg.confirmed_label.clone(),
            },
            Effect::set_style(button, "background-color", self.cfg.success_color.clone()),
            Effect::ResetForm { node: form },
            Effect::Schedule {
                delay_ms: self.cfg.restore_delay_ms,
                task: Task::RestoreSubmit { form },
            },
        ]
    }

    fn restore(&mut self, form: NodeId) -> Vec<Effect> {
        let Some(state) = self.forms.get_mut(&form) else {
            return Vec::new();
        };
        let (FormPhase::Confirmed, Some(button)) = (state.phase, state.button) else {
            return Vec::new();
        };
        state.phase = FormPhase::Idle;
        vec![
            Effect::SetText {
                node: button,
                text: std::mem::take(&mut state.original_label),
            },
            Effect::SetDisabled {
                node: button,
                disabled: false,
            },
            Effect::clear_style(button, "background-color"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;

    const FORM: NodeId = NodeId(10);
    const BUTTON: NodeId = NodeId(11);

    fn setup() -> (FormFeedback, FakePage) {
        let mut f = FormFeedback::new(FormConfig::default());
        f.register(FORM, Some(BUTTON));
        let mut page = FakePage::default();
        page.texts.insert(BUTTON, "Get a Quote".into());
        (f, page)
    }

    fn fields() -> Vec<(String, String)> {
        vec![
            ("name".into(), "Ada".into()),
            ("email".into(), "ada@example.com".into()),
        ]
    }

    #[test]
    fn full_cycle() {
        let (mut f, page) = setup();

        let fx = f.on_submit(FORM, fields(), &page);
        assert_eq!(f.phase(FORM), Some(FormPhase::Sending));
        assert_eq!(
            fx,
            vec![
                Effect::PreventDefault,
                Effect::SetText {
                    node: BUTTON,
                    text: "Sending...".into()
                },
                Effect::SetDisabled {
                    node: BUTTON,
                    disabled: true
                },
                Effect::Schedule {
                    delay_ms: 1000,
                    task: Task::ConfirmSubmit { form: FORM }
                },
            ]
        );
        assert_eq!(
            f.last_snapshot(FORM).and_then(|s| s.get("email")).map(String::as_str),
            Some("ada@example.com")
        );

        let fx = f.on_task(Task::ConfirmSubmit { form: FORM });
        assert_eq!(f.phase(FORM), Some(FormPhase::Confirmed));
        assert!(fx.contains(&Effect::ResetForm { node: FORM }));
        assert!(fx.contains(&Effect::SetStyle {
            node: BUTTON,
            property: "background-color",
            value: "#4CAF50".into()
        }));
        assert!(!fx.iter().any(|e| matches!(e, Effect::SetDisabled { .. })));
        assert!(fx.contains(&Effect::Schedule {
            delay_ms: 2000,
            task: Task::RestoreSubmit { form: FORM }
        }));

        let fx = f.on_task(Task::RestoreSubmit { form: FORM });
        assert_eq!(f.phase(FORM), Some(FormPhase::Idle));
        assert_eq!(
            fx,
            vec![
                Effect::SetText {
                    node: BUTTON,
                    text: "Get a Quote".into()
                },
                Effect::SetDisabled {
                    node: BUTTON,
                    disabled: false
                },
                Effect::SetStyle {
                    node: BUTTON,
                    property: "background-color",
                    value: String::new()
                },
            ]
        );
    }

    #[test]
    fn resubmit_while_busy_is_suppressed() {
        let (mut f, page) = setup();
        f.on_submit(FORM, fields(), &page);
        assert_eq!(f.on_submit(FORM, fields(), &page), vec![Effect::PreventDefault]);
        f.on_task(Task::ConfirmSubmit { form: FORM });
        assert_eq!(f.on_submit(FORM, fields(), &page), vec![Effect::PreventDefault]);
    }

    #[test]
    fn stray_timers_are_ignored() {
        let (mut f, _) = setup();
        assert!(f.on_task(Task::RestoreSubmit { form: FORM }).is_empty());
        assert!(f.on_task(Task::ConfirmSubmit { form: FORM }).is_empty());
        assert!(f.on_task(Task::ConfirmSubmit { form: NodeId(99) }).is_empty());
        assert_eq!(f.phase(FORM), Some(FormPhase::Idle));
    }

    #[test]
    fn form_without_button_still_suppresses_navigation() {
        let mut f = FormFeedback::new(FormConfig::default());
        f.register(FORM, None);
        let fx = f.on_submit(FORM, fields(), &FakePage::default());
        assert_eq!(fx, vec![Effect::PreventDefault]);
        assert_eq!(f.phase(FORM), Some(FormPhase::Idle));
    }
}
