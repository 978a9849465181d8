use urlencoding::encode;

use crate::traits::Navigator;

use super::document::{Document, ElementId};

/// Every inquiry on the page lands in this inbox
pub const CONTACT_RECIPIENT: &str = "info@mohamedali.site";
pub const CONTACT_SUBJECT: &str = "Contact from Almasa Website";

/// Compose the contact-form mailto URI. Subject and body are percent-encoded;
/// the body embeds all three fields with literal newline separators.
pub fn contact_mailto(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let body = format!("Name: {name}\nEmail: {email}\nMessage: {message}");
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode(CONTACT_SUBJECT),
        encode(&body)
    )
}

/// Compose the service call-to-action mailto URI
pub fn service_mailto(recipient: &str, service: &str) -> String {
    let subject = format!("Inquiry about {service}");
    let body = format!(
        "Hello Almasa,\n\nI am interested in your {service} service. \
         Please provide more information.\n\nThank you."
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode(&subject),
        encode(&body)
    )
}

/// Intercepts the contact form submission, reads the three input fields
/// (missing fields read as empty) and hands the composed mailto URI to the
/// navigator, which delegates to the default mail client.
#[derive(Debug)]
pub struct ContactFormController {
    pub form: ElementId,
    recipient: String,
    name: Option<ElementId>,
    email: Option<ElementId>,
    message: Option<ElementId>,
}

impl ContactFormController {
    pub fn new(
        form: ElementId,
        recipient: String,
        name: Option<ElementId>,
        email: Option<ElementId>,
        message: Option<ElementId>,
    ) -> Self {
        Self {
            form,
            recipient,
            name,
            email,
            message,
        }
    }

    fn field_value<'a>(doc: &'a Document, field: Option<ElementId>) -> &'a str {
        field
            .and_then(|el| doc.attribute(el, "value"))
            .unwrap_or("")
    }

    pub fn on_submit(&self, doc: &Document, form: ElementId, navigator: &mut dyn Navigator) -> bool {
        if form != self.form {
            return false;
        }
        let uri = contact_mailto(
            &self.recipient,
            Self::field_value(doc, self.name),
            Self::field_value(doc, self.email),
            Self::field_value(doc, self.message),
        );
        navigator.navigate(&uri);
        true
    }
}

/// Per-service inquiry buttons: clicking one opens a pre-filled mail about
/// the service named in its `data-service` attribute.
#[derive(Debug)]
pub struct ServiceCtaController {
    buttons: Vec<ElementId>,
    recipient: String,
}

impl ServiceCtaController {
    pub fn new(buttons: Vec<ElementId>, recipient: String) -> Self {
        Self { buttons, recipient }
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn on_click(&self, doc: &Document, target: ElementId, navigator: &mut dyn Navigator) -> bool {
        if !self.buttons.contains(&target) {
            return false;
        }
        let service = doc.attribute(target, "data-service").unwrap_or("");
        navigator.navigate(&service_mailto(&self.recipient, service));
        true
    }
}
