use std::collections::{HashMap, HashSet};

use crate::math::scroll_fraction;
use crate::types::Rect;

/// Handle to one element in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// One element: tag, classes, attributes, text content and a layout rect.
/// Form controls keep their user input in the `value` attribute.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    classes: HashSet<String>,
    attributes: HashMap<String, String>,
    text: String,
    rect: Rect,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

/// Scrollable window onto the page
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

/// In-memory stand-in for the browser document: a flat element store with
/// class/attribute/text mutation, a viewport, and the visibility queries the
/// controllers need. Controllers receive explicit [`ElementId`] handles, not
/// this struct, at construction time.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    pub viewport: Viewport,
    content_height: f32,
    styles: Vec<String>,
}

impl Document {
    pub fn new(viewport_width: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            elements: Vec::new(),
            viewport: Viewport {
                width: viewport_width,
                height: viewport_height,
                scroll_y: 0.0,
            },
            content_height,
            styles: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    // --- queries ---

    pub fn query_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.attributes.get("id").map(String::as_str) == Some(id))
            .map(ElementId)
    }

    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.contains(class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    pub fn query_tag(&self, tag: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tag == tag)
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    // --- element access ---

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        self.elements[el.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, el: ElementId, class: &str) {
        self.elements[el.0].classes.remove(class);
    }

    pub fn toggle_class(&mut self, el: ElementId, class: &str) {
        if !self.elements[el.0].classes.remove(class) {
            self.elements[el.0].classes.insert(class.to_string());
        }
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements[el.0].classes.contains(class)
    }

    pub fn attribute(&self, el: ElementId, name: &str) -> Option<&str> {
        self.elements[el.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        self.elements[el.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn text(&self, el: ElementId) -> &str {
        &self.elements[el.0].text
    }

    pub fn set_text(&mut self, el: ElementId, text: &str) {
        self.elements[el.0].text = text.to_string();
    }

    pub fn rect(&self, el: ElementId) -> Rect {
        self.elements[el.0].rect
    }

    // --- page-level styles (the fallback renderer appends keyframes here) ---

    pub fn push_style(&mut self, css: String) {
        self.styles.push(css);
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    // --- scrolling and visibility ---

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.viewport.scroll_y = scroll_y.clamp(0.0, self.max_scroll());
    }

    /// Normalized scroll progress, 0 when there is no scrollable range
    pub fn scroll_fraction(&self) -> f32 {
        scroll_fraction(
            self.viewport.scroll_y,
            self.content_height,
            self.viewport.height,
        )
    }

    /// Fraction of the element currently inside the viewport, with the
    /// viewport bottom shifted by `bottom_margin` (negative shrinks it, the
    /// rootMargin bias of the reveal observer).
    pub fn visible_ratio(&self, el: ElementId, bottom_margin: f32) -> f32 {
        let rect = self.elements[el.0].rect;
        if rect.height <= 0.0 {
            return 0.0;
        }
        let view_top = self.viewport.scroll_y;
        let view_bottom = self.viewport.scroll_y + self.viewport.height + bottom_margin;
        let overlap = rect.bottom().min(view_bottom) - rect.y.max(view_top);
        (overlap / rect.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_section() -> (Document, ElementId) {
        let mut doc = Document::new(1000.0, 800.0, 3000.0);
        let el = doc.push(Element::new("section").with_rect(Rect::new(0.0, 1000.0, 1000.0, 400.0)));
        (doc, el)
    }

    #[test]
    fn test_query_id_and_class() {
        let mut doc = Document::new(100.0, 100.0, 100.0);
        let a = doc.push(Element::new("div").with_attr("id", "hero").with_class("reveal"));
        let b = doc.push(Element::new("div").with_class("reveal"));
        assert_eq!(doc.query_id("hero"), Some(a));
        assert_eq!(doc.query_id("missing"), None);
        assert_eq!(doc.query_class("reveal"), vec![a, b]);
    }

    #[test]
    fn test_toggle_class_round_trip() {
        let mut doc = Document::new(100.0, 100.0, 100.0);
        let el = doc.push(Element::new("nav"));
        doc.toggle_class(el, "active");
        assert!(doc.has_class(el, "active"));
        doc.toggle_class(el, "active");
        assert!(!doc.has_class(el, "active"));
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut doc = Document::new(1000.0, 800.0, 3000.0);
        doc.set_scroll(9999.0);
        assert_eq!(doc.viewport.scroll_y, 2200.0);
        doc.set_scroll(-5.0);
        assert_eq!(doc.viewport.scroll_y, 0.0);
    }

    #[test]
    fn test_visible_ratio_off_screen() {
        let (doc, el) = doc_with_section();
        assert_eq!(doc.visible_ratio(el, 0.0), 0.0);
    }

    #[test]
    fn test_visible_ratio_partially_on_screen() {
        let (mut doc, el) = doc_with_section();
        // Element spans 1000..1400; viewport 400..1200 shows half of it
        doc.set_scroll(400.0);
        assert!((doc.visible_ratio(el, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_visible_ratio_bottom_margin_bias() {
        let (mut doc, el) = doc_with_section();
        // Viewport bottom lands exactly on the element top; the -50px margin
        // keeps it counted as invisible
        doc.set_scroll(250.0);
        assert!(doc.visible_ratio(el, 0.0) > 0.0);
        assert_eq!(doc.visible_ratio(el, -50.0), 0.0);
    }

    #[test]
    fn test_zero_height_element_never_visible() {
        let mut doc = Document::new(1000.0, 800.0, 3000.0);
        let el = doc.push(Element::new("span").with_rect(Rect::new(0.0, 100.0, 10.0, 0.0)));
        assert_eq!(doc.visible_ratio(el, 0.0), 0.0);
    }
}
