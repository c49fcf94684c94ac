//! Hooks for collaborators outside the chart core.

mod plugins;
mod reveal;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
pub use reveal::{RevealCapability, RevealKind, RevealRegion};
