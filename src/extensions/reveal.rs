use serde::{Deserialize, Serialize};

/// Scroll-linked behavior a page may attach to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    /// Fades and slides up once when the region enters the viewport.
    FadeUpOnEntry,
    /// Participates in a scroll-scrubbed transform sequence.
    ScrubbedTransform,
}

/// Region of a chart canvas offered to the page's animation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealRegion {
    pub id: String,
    pub kind: RevealKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Capability handed in by the page that owns scroll animation.
pub trait RevealCapability {
    fn mark_revealable(&mut self, region: RevealRegion);
}

impl RevealCapability for Vec<RevealRegion> {
    fn mark_revealable(&mut self, region: RevealRegion) {
        self.push(region);
    }
}
