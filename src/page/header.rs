use super::document::{Document, ElementId};

/// Scroll depth past which the header gets its condensed styling
const SCROLLED_THRESHOLD: f32 = 50.0;

/// Adds the `scrolled` class to the header once the page has scrolled past
/// the threshold, removes it above. Idempotent per scroll event.
#[derive(Debug)]
pub struct HeaderController {
    header: ElementId,
}

impl HeaderController {
    pub fn new(header: ElementId) -> Self {
        Self { header }
    }

    pub fn on_scroll(&self, doc: &mut Document) {
        if doc.viewport.scroll_y > SCROLLED_THRESHOLD {
            doc.add_class(self.header, "scrolled");
        } else {
            doc.remove_class(self.header, "scrolled");
        }
    }
}
