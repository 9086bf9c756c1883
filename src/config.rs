//! Page configuration.
//!
//! Every field has a default, so an absent or partial JSON document is fine.
//! The web shell reads an optional inline `<script type="application/json">`
//! block and falls back to [`SiteConfig::default`] when it is missing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub classes: Classes,
    pub selectors: Selectors,
    pub header: HeaderConfig,
    pub reveal: ObserverOptions,
    pub cards: ObserverOptions,
    pub forms: FormConfig,
    pub parallax: ParallaxConfig,
    pub hover: HoverConfig,
    pub banner: BannerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            classes: Classes::default(),
            selectors: Selectors::default(),
            header: HeaderConfig::default(),
            reveal: ObserverOptions {
                root_margin: "-100px".to_string(),
                threshold: 0.1,
            },
            cards: ObserverOptions {
                root_margin: "0px".to_string(),
                threshold: 0.2,
            },
            forms: FormConfig::default(),
            parallax: ParallaxConfig::default(),
            hover: HoverConfig::default(),
            banner: BannerConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("reveal.threshold", self.reveal.threshold)?;
        check_threshold("cards.threshold", self.cards.threshold)?;
        check_margin("reveal.root_margin", &self.reveal.root_margin)?;
        check_margin("cards.root_margin", &self.cards.root_margin)?;
        check_class("classes.scrolled", &self.classes.scrolled)?;
        check_class("classes.active", &self.classes.active)?;
        check_class("classes.visible", &self.classes.visible)?;
        check_finite("parallax.rate", self.parallax.rate)?;
        check_finite("parallax.scale", self.parallax.scale)?;
        check_finite("header.threshold", self.header.threshold)?;
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(Error::InvalidValue {
                field: "log_level",
                reason: format!("unknown level `{}`", self.log_level),
            });
        }
        Ok(())
    }
}

fn check_threshold(field: &'static str, v: f64) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            field,
            reason: "must be within [0, 1]".to_string(),
        })
    }
}

/// `rootMargin` takes one to four lengths, each in `px` or `%`. Anything else
/// makes the observer constructor throw.
fn check_margin(field: &'static str, margin: &str) -> Result<()> {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    let valid = (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part
                .strip_suffix("px")
                .or_else(|| part.strip_suffix('%'))
                .unwrap_or("");
            number.parse::<f64>().is_ok_and(f64::is_finite)
        });
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            field,
            reason: format!("`{margin}` is not 1-4 px or % lengths"),
        })
    }
}

fn check_class(field: &'static str, class: &str) -> Result<()> {
    if class.trim().is_empty() || class.contains(char::is_whitespace) {
        return Err(Error::InvalidValue {
            field,
            reason: "must be a single non-empty class name".to_string(),
        });
    }
    Ok(())
}

fn check_finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            field,
            reason: "must be finite".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub scrolled: String,
    pub active: String,
    pub visible: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            scrolled: "scrolled".to_string(),
            active: "active".to_string(),
            visible: "visible".to_string(),
        }
    }
}

/// Where each controller finds its elements. Ids are bare (no `#`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header_id: String,
    pub menu_button_id: String,
    pub menu_panel_id: String,
    pub mobile_links: String,
    pub anchors: String,
    pub scroll_indicator_id: String,
    pub projects_id: String,
    pub reveal: String,
    pub cards: String,
    pub form_ids: Vec<String>,
    pub submit_button: String,
    pub lazy_images: String,
    pub deferred_src_attr: String,
    pub hero_image: String,
    pub project_cards: String,
    pub reduced_motion: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header_id: "header".to_string(),
            menu_button_id: "mobileMenuBtn".to_string(),
            menu_panel_id: "mobileMenu".to_string(),
            mobile_links: ".mobile-nav-link, .mobile-cta".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            scroll_indicator_id: "scrollIndicator".to_string(),
            projects_id: "projects".to_string(),
            reveal: ".animate-on-scroll".to_string(),
            cards: ".service-card".to_string(),
            form_ids: vec!["heroForm".to_string(), "ctaForm".to_string()],
            submit_button: "button[type=\"submit\"]".to_string(),
            lazy_images: "img[data-src]".to_string(),
            deferred_src_attr: "data-src".to_string(),
            hero_image: ".hero-img".to_string(),
            project_cards: ".project-card".to_string(),
            reduced_motion: ".animate-fade-up, .animate-slide-in, .animate-on-scroll".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { threshold: 50.0 }
    }
}

/// Mirrors `IntersectionObserverInit` (viewport root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px".to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub sending_label: String,
    pub confirmed_label: String,
    pub success_color: String,
    pub confirm_delay_ms: u32,
    pub restore_delay_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sending_label: "Sending...".to_string(),
            confirmed_label: "Thank You!".to_string(),
            success_color: "#4CAF50".to_string(),
            confirm_delay_ms: 1000,
            restore_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub rate: f64,
    pub scale: f64,
    pub min_width_px: u32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            rate: 0.3,
            scale: 1.1,
            min_width_px: 1024,
        }
    }
}

impl ParallaxConfig {
    pub fn media_query(&self) -> String {
        format!("(min-width: {}px)", self.min_width_px)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub raised_z_index: i32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { raised_z_index: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerLine {
    pub text: String,
    pub css: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub lines: Vec<BannerLine>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                BannerLine {
                    text: " ARCHILINE ".to_string(),
                    css: "background: #2C2C2C; color: #C9B99A; font-size: 20px; font-weight: bold; padding: 10px 20px;".to_string(),
                },
                BannerLine {
                    text: " Modern Architecture for Contemporary Living ".to_string(),
                    css: "color: #666; font-size: 12px;".to_string(),
                },
            ],
        }
    }
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.reveal.root_margin, "-100px");
        assert_eq!(cfg.cards.threshold, 0.2);
        assert_eq!(cfg.parallax.media_query(), "(min-width: 1024px)");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{ "header": { "threshold": 80 }, "forms": { "confirmed_label": "Merci" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.header.threshold, 80.0);
        assert_eq!(cfg.forms.confirmed_label, "Merci");
        assert_eq!(cfg.forms.sending_label, "Sending...");
        assert_eq!(cfg.forms.confirm_delay_ms, 1000);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "cards": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                field: "cards.threshold",
                ..
            }
        ));
    }

    #[test]
    fn root_margins_must_be_px_or_percent_lengths() {
        assert!(SiteConfig::from_json(r#"{ "reveal": { "root_margin": "-10% 0px 20px 5%" } }"#).is_ok());
        for bad in ["", "   ", "10", "10em", "px", "1px 2px 3px 4px 5px", "abc"] {
            let raw = format!(r#"{{ "cards": {{ "root_margin": "{bad}" }} }}"#);
            let err = SiteConfig::from_json(&raw).unwrap_err();
            assert!(
                matches!(err, Error::InvalidValue { field: "cards.root_margin", .. }),
                "margin {bad:?}"
            );
        }
    }

    #[test]
    fn class_names_must_be_single_tokens() {
        let err = SiteConfig::from_json(r#"{ "classes": { "visible": "is visible" } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { field: "classes.visible", .. }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(SiteConfig::from_json("{ nope"), Err(Error::Config(_))));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(SiteConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
        assert!(SiteConfig::from_json(r#"{ "log_level": "DEBUG" }"#).is_ok());
    }
}
