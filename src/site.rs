//! Composition root: builds every controller at startup and routes page
//! events to them.

use crate::anchors::{ScrollIndicator, SmoothScroll};
use crate::banner::banner;
use crate::config::{ObserverOptions, SiteConfig};
use crate::forms::FormFeedback;
use crate::header::HeaderScroll;
use crate::hover::HoverLift;
use crate::lazy::{LazyImages, LoadStrategy};
use crate::menu::MobileMenu;
use crate::motion::reduce_motion;
use crate::page::{Effect, NodeId, PageEvent, PageQuery, Watcher};
use crate::parallax::Parallax;
use crate::reveal::RevealWatcher;

/// A form and its submit button, if it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct FormNodes {
    pub form: NodeId,
    pub button: Option<NodeId>,
}

/// Elements the shell found in the document, already registered as nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub header: NodeId,
    pub menu_button: NodeId,
    pub menu_panel: NodeId,
    pub body: NodeId,
    pub scroll_indicator: Option<NodeId>,
    pub projects: Option<NodeId>,
    pub reveal: Vec<NodeId>,
    pub cards: Vec<NodeId>,
    pub forms: Vec<FormNodes>,
    /// Images with a deferred source, paired with that source.
    pub lazy_images: Vec<(NodeId, String)>,
    pub hero_image: Option<NodeId>,
    pub project_cards: Vec<NodeId>,
    pub reduced_motion: Vec<NodeId>,
}

/// Capability probes, evaluated once before startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub native_lazy_loading: bool,
    /// The parallax media query (`min-width`) matched.
    pub wide_viewport: bool,
    pub prefers_reduced_motion: bool,
}

pub struct Site {
    header: HeaderScroll,
    menu: MobileMenu,
    anchors: SmoothScroll,
    indicator: ScrollIndicator,
    reveal: RevealWatcher,
    cards: RevealWatcher,
    forms: FormFeedback,
    images: LazyImages,
    parallax: Parallax,
    hover: HoverLift,
    lazy_options: ObserverOptions,
}

impl Site {
    pub fn start(
        config: &SiteConfig,
        layout: PageLayout,
        caps: Capabilities,
        page: &impl PageQuery,
    ) -> (Self, Vec<Effect>) {
        let classes = &config.classes;
        let mut site = Self {
            header: HeaderScroll::new(
                layout.header,
                classes.scrolled.clone(),
                config.header.threshold,
            ),
            menu: MobileMenu::new(
                layout.menu_button,
                layout.menu_panel,
                layout.body,
                classes.active.clone(),
            ),
            anchors: SmoothScroll::new(layout.header),
            indicator: ScrollIndicator::new(layout.scroll_indicator.and(layout.projects)),
            reveal: RevealWatcher::new(
                Watcher::Reveal,
                config.reveal.clone(),
                classes.visible.clone(),
                true,
            ),
            cards: RevealWatcher::new(
                Watcher::Cards,
                config.cards.clone(),
                classes.visible.clone(),
                false,
            ),
            forms: FormFeedback::new(config.forms.clone()),
            images: LazyImages::new(LoadStrategy::detect(caps.native_lazy_loading)),
            parallax: Parallax::new(layout.hero_image, caps.wide_viewport, &config.parallax),
            hover: HoverLift::new(config.hover.raised_z_index),
            lazy_options: ObserverOptions::default(),
        };

        for f in &layout.forms {
            site.forms.register(f.form, f.button);
        }

        let mut out = Vec::new();
        out.extend(site.header.on_scroll(page.scroll_y()));
        out.extend(site.reveal.observe(layout.reveal));
        out.extend(site.cards.observe(layout.cards));
        out.extend(site.images.start(layout.lazy_images));
        out.extend(reduce_motion(caps.prefers_reduced_motion, layout.reduced_motion));
        out.extend(banner(&config.banner));

        tracing::info!(
            parallax = site.parallax.is_active(),
            lazy = ?site.images.strategy(),
            reduced_motion = caps.prefers_reduced_motion,
            "page behaviors ready"
        );
        (site, out)
    }

    pub fn observer_options(&self, watcher: Watcher) -> &ObserverOptions {
        match watcher {
            Watcher::Reveal => self.reveal.options(),
            Watcher::Cards => self.cards.options(),
            Watcher::LazyImages => &self.lazy_options,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn handle(&mut self, event: PageEvent, page: &impl PageQuery) -> Vec<Effect> {
        tracing::trace!(?event, "dispatch");
        match event {
            PageEvent::Scroll => {
                let y = page.scroll_y();
                self.header
                    .on_scroll(y)
                    .into_iter()
                    .chain(self.parallax.on_scroll(y))
                    .collect()
            }
            PageEvent::MenuButtonClick => self.menu.toggle(),
            PageEvent::MobileLinkClick => self.menu.on_link(),
            PageEvent::KeyDown { key } => self.menu.on_key(&key),
            PageEvent::AnchorClick { href } => self.anchors.on_click(&href, page),
            PageEvent::ScrollIndicatorClick => self.indicator.on_click().into_iter().collect(),
            PageEvent::Intersection {
                watcher,
                node,
                intersecting,
            } => match watcher {
                Watcher::Reveal => self.reveal.on_intersection(node, intersecting, page),
                Watcher::Cards => self.cards.on_intersection(node, intersecting, page),
                Watcher::LazyImages => self.images.on_intersection(node, intersecting),
            },
            PageEvent::Submit { form, fields } => self.forms.on_submit(form, fields, page),
            PageEvent::PointerEnter { node } => vec![self.hover.on_enter(node)],
            PageEvent::PointerLeave { node } => vec![self.hover.on_leave(node)],
            PageEvent::Timer(task) => self.forms.on_task(task),
        }
    }
}
