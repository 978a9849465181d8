pub mod bootstrap;
pub mod contact;
pub mod counter;
pub mod document;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod smooth_scroll;

pub use bootstrap::Page;
pub use contact::{contact_mailto, service_mailto, CONTACT_RECIPIENT};
pub use document::{Document, Element, ElementId};
