use super::document::{Document, ElementId};

/// Minimum visible fraction before an element reveals
const REVEAL_THRESHOLD: f32 = 0.1;
/// Bottom margin bias: elements must clear the lowest 50px of the viewport
const REVEAL_BOTTOM_MARGIN: f32 = -50.0;

/// One-shot reveal animation trigger. An element gets the `active` class the
/// first time at least 10% of it is inside the biased viewport, and is then
/// dropped from the watch list - revealing never reverts.
#[derive(Debug)]
pub struct RevealController {
    pending: Vec<ElementId>,
}

impl RevealController {
    pub fn new(elements: Vec<ElementId>) -> Self {
        Self { pending: elements }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn on_scroll(&mut self, doc: &mut Document) {
        self.pending.retain(|&el| {
            if doc.visible_ratio(el, REVEAL_BOTTOM_MARGIN) >= REVEAL_THRESHOLD {
                doc.add_class(el, "active");
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::document::Element;
    use crate::types::Rect;

    fn setup() -> (Document, RevealController, ElementId) {
        let mut doc = Document::new(1000.0, 800.0, 3000.0);
        let el = doc.push(
            Element::new("section")
                .with_class("reveal")
                .with_rect(Rect::new(0.0, 1500.0, 1000.0, 300.0)),
        );
        let controller = RevealController::new(vec![el]);
        (doc, controller, el)
    }

    #[test]
    fn test_hidden_until_threshold() {
        let (mut doc, mut controller, el) = setup();
        controller.on_scroll(&mut doc);
        assert!(!doc.has_class(el, "active"));
        assert_eq!(controller.pending_count(), 1);
    }

    #[test]
    fn test_reveals_when_visible() {
        let (mut doc, mut controller, el) = setup();
        doc.set_scroll(1200.0);
        controller.on_scroll(&mut doc);
        assert!(doc.has_class(el, "active"));
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_never_unreveals() {
        let (mut doc, mut controller, el) = setup();
        doc.set_scroll(1200.0);
        controller.on_scroll(&mut doc);
        // Scroll back to the top; the class must stay
        doc.set_scroll(0.0);
        controller.on_scroll(&mut doc);
        assert!(doc.has_class(el, "active"));
    }

    #[test]
    fn test_fires_at_most_once() {
        let (mut doc, mut controller, _) = setup();
        doc.set_scroll(1200.0);
        controller.on_scroll(&mut doc);
        controller.on_scroll(&mut doc);
        assert_eq!(controller.pending_count(), 0);
    }
}
