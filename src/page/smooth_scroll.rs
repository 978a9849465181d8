use crate::math::approach;

use super::document::{Document, ElementId};

/// Per-frame easing factor for the scroll glide
const SCROLL_EASE: f32 = 0.1;
/// Distance below which the glide snaps to its destination
const SNAP_DISTANCE: f32 = 0.5;

/// Same-page anchor navigation: clicking a `#fragment` link glides the
/// viewport until the target element's top is aligned with the viewport top.
/// The mapping from link to target is resolved once at mount; links whose
/// fragment matches no element are not intercepted (the bare `#` included).
#[derive(Debug, Default)]
pub struct SmoothScroll {
    links: Vec<(ElementId, ElementId)>,
    destination: Option<f32>,
}

impl SmoothScroll {
    pub fn new(links: Vec<(ElementId, ElementId)>) -> Self {
        Self {
            links,
            destination: None,
        }
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_scrolling(&self) -> bool {
        self.destination.is_some()
    }

    /// Returns true if the click was an intercepted anchor link
    pub fn on_click(&mut self, doc: &Document, target: ElementId) -> bool {
        if let Some(&(_, dest)) = self.links.iter().find(|(link, _)| *link == target) {
            self.destination = Some(doc.rect(dest).y);
            true
        } else {
            false
        }
    }

    /// Ease toward the destination; returns true while the viewport moved
    pub fn on_frame(&mut self, doc: &mut Document) -> bool {
        let Some(dest) = self.destination else {
            return false;
        };
        let dest = dest.clamp(0.0, doc.max_scroll());
        let next = approach(doc.viewport.scroll_y, dest, SCROLL_EASE);
        if (dest - next).abs() < SNAP_DISTANCE {
            doc.set_scroll(dest);
            self.destination = None;
        } else {
            doc.set_scroll(next);
        }
        true
    }
}
