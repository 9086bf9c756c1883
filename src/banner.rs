use crate::config::BannerConfig;
use crate::page::Effect;

/// Styled console greeting, printed once at startup.
pub fn banner(cfg: &BannerConfig) -> Vec<Effect> {
    cfg.lines
        .iter()
        .map(|line| Effect::ConsoleStyled {
            text: format!("%c{}", line.text),
            css: line.css.clone(),
        })
        .collect()
}
