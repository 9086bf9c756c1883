//! Page behaviors for a static marketing site.
//!
//! Every behavior is a small controller with its own state. Controllers are
//! driven by [`page::PageEvent`]s and answer with [`page::Effect`]s, so the
//! whole crate runs and tests on the host; `vitrine_web` is the wasm shell that
//! talks to the real DOM.

pub mod anchors;
pub mod banner;
pub mod config;
pub mod error;
pub mod float_fmt;
pub mod forms;
pub mod header;
pub mod hover;
pub mod lazy;
pub mod menu;
pub mod motion;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod site;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use page::{Effect, NodeId, PageEvent, PageQuery, Task, Watcher};
pub use site::{Capabilities, FormNodes, PageLayout, Site};
