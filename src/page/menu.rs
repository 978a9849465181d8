use super::document::{Document, ElementId};

const ACTIVE: &str = "active";

/// Mobile navigation: clicking the toggle flips the open state on both the
/// menu and the toggle control; clicking any nav link closes the menu.
#[derive(Debug)]
pub struct MenuController {
    toggle: ElementId,
    menu: ElementId,
    links: Vec<ElementId>,
}

impl MenuController {
    pub fn new(toggle: ElementId, menu: ElementId, links: Vec<ElementId>) -> Self {
        Self {
            toggle,
            menu,
            links,
        }
    }

    /// Returns true if the click was handled by this controller
    pub fn on_click(&self, doc: &mut Document, target: ElementId) -> bool {
        if target == self.toggle {
            doc.toggle_class(self.menu, ACTIVE);
            doc.toggle_class(self.toggle, ACTIVE);
            true
        } else if self.links.contains(&target) {
            doc.remove_class(self.menu, ACTIVE);
            doc.remove_class(self.toggle, ACTIVE);
            true
        } else {
            false
        }
    }
}
