//! Tooltip overlay simulator
//!
//! A headless model of the hover-tooltip layer of an annotated document
//! viewer: pointer events go in, panel position/visibility state comes
//! out. No rendering; hosts draw the panel however they like.

pub mod config;
pub mod error;
pub mod markup;
pub mod page;
pub mod panel;
pub mod session;
pub mod style;
pub mod timer;
pub mod tooltip;
pub mod viewport;

pub use error::{Error, Result};
pub use tooltip::{TooltipController, Visibility};
