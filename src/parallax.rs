use crate::config::ParallaxConfig;
use crate::float_fmt::fmt_css_number;
use crate::page::{Effect, NodeId};

/// Slow-scrolling hero image. Enabled once at startup; never re-evaluated.
#[derive(Debug, Clone)]
pub struct Parallax {
    hero: Option<NodeId>,
    rate: f64,
    scale: f64,
}

impl Parallax {
    /// Active only when the hero exists and the viewport was wide enough at load.
    pub fn new(hero: Option<NodeId>, wide_viewport: bool, cfg: &ParallaxConfig) -> Self {
        Self {
            hero: hero.filter(|_| wide_viewport),
            rate: cfg.rate,
            scale: cfg.scale,
        }
    }

    pub fn is_active(&self) -> bool {
        self.hero.is_some()
    }

    pub fn on_scroll(&self, scroll_y: f64) -> Option<Effect> {
        let hero = self.hero?;
        let value = format!(
            "scale({}) translateY({}px)",
            fmt_css_number(self.scale, 3),
            fmt_css_number(scroll_y * self.rate, 3)
        );
        Some(Effect::set_style(hero, "transform", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_without_hero_or_on_narrow_viewports() {
        let cfg = ParallaxConfig::default();
        assert!(!Parallax::new(None, true, &cfg).is_active());
        let narrow = Parallax::new(Some(NodeId(1)), false, &cfg);
        assert!(!narrow.is_active());
        assert_eq!(narrow.on_scroll(300.0), None);
    }

    #[test]
    fn translation_follows_scroll() {
        let p = Parallax::new(Some(NodeId(1)), true, &ParallaxConfig::default());
        assert_eq!(
            p.on_scroll(100.0),
            Some(Effect::SetStyle {
                node: NodeId(1),
                property: "transform",
                value: "scale(1.1) translateY(30px)".into()
            })
        );
        assert_eq!(
            p.on_scroll(15.0),
            Some(Effect::SetStyle {
                node: NodeId(1),
                property: "transform",
                value: "scale(1.1) translateY(4.5px)".into()
            })
        );
    }

    #[test]
    fn extreme_scale_from_config_still_renders() {
        let mut cfg = crate::config::SiteConfig::default();
        cfg.parallax.scale = -9223372036854775.808;
        cfg.validate().unwrap();
        let p = Parallax::new(Some(NodeId(1)), true, &cfg.parallax);
        assert_eq!(
            p.on_scroll(10.0),
            Some(Effect::SetStyle {
                node: NodeId(1),
                property: "transform",
                value: "scale(-9223372036854775.808) translateY(3px)".into()
            })
        );
    }
}
