use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use almasa_page::page::document::Element;
use almasa_page::page::{Document, Page};
use almasa_page::render::{PixmapSurface, UnavailableSurface};
use almasa_page::traits::RecordingNavigator;
use almasa_page::types::Rect;
use almasa_page::PageConfig;

/// A page with every widget the runtime knows how to wire, laid out down a
/// 3600px column under a 1280x800 viewport.
fn full_document() -> Document {
    let mut doc = Document::new(1280.0, 800.0, 3600.0);

    doc.push(
        Element::new("header")
            .with_class("header")
            .with_rect(Rect::new(0.0, 0.0, 1280.0, 80.0)),
    );
    doc.push(Element::new("button").with_class("menu-toggle"));
    doc.push(Element::new("ul").with_class("nav-menu"));
    doc.push(
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "#destinations"),
    );

    doc.push(
        Element::new("div")
            .with_attr("id", "airplane-canvas")
            .with_rect(Rect::new(240.0, 120.0, 800.0, 450.0)),
    );

    doc.push(
        Element::new("span")
            .with_class("counter-number")
            .with_attr("data-target", "12500")
            .with_rect(Rect::new(100.0, 100.0, 200.0, 60.0)),
    );

    doc.push(
        Element::new("section")
            .with_attr("id", "destinations")
            .with_class("reveal")
            .with_rect(Rect::new(0.0, 900.0, 1280.0, 600.0)),
    );

    doc.push(
        Element::new("button")
            .with_class("service-cta")
            .with_attr("data-service", "Flight Booking"),
    );

    doc.push(Element::new("form").with_attr("id", "contact-form"));
    doc.push(Element::new("input").with_attr("id", "name").with_attr("value", "Jane Doe"));
    doc.push(Element::new("input").with_attr("id", "email").with_attr("value", "jane@x.com"));
    doc.push(
        Element::new("textarea")
            .with_attr("id", "message")
            .with_attr("value", "Hi\nthere"),
    );

    doc
}

fn mount_without_3d(doc: &mut Document) -> Page {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    Page::mount(
        doc,
        Box::new(UnavailableSurface),
        &PageConfig::default(),
        &mut rng,
    )
}

#[test]
fn test_full_document_wires_every_controller() {
    let mut doc = full_document();
    let page = mount_without_3d(&mut doc);
    assert_eq!(page.controller_count(), 8);
}

#[test]
fn test_menu_toggle_and_link_dismiss() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let toggle = doc.query_class("menu-toggle")[0];
    let menu = doc.query_class("nav-menu")[0];
    let link = doc.query_class("nav-link")[0];
    let mut nav = RecordingNavigator::new();

    page.on_click(&mut doc, toggle, &mut nav);
    assert!(doc.has_class(toggle, "active"));
    assert!(doc.has_class(menu, "active"));

    page.on_click(&mut doc, link, &mut nav);
    assert!(!doc.has_class(toggle, "active"));
    assert!(!doc.has_class(menu, "active"));
}

#[test]
fn test_header_styles_past_fifty_pixels() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let header = doc.query_class("header")[0];

    doc.set_scroll(50.0);
    page.on_scroll(&mut doc);
    assert!(!doc.has_class(header, "scrolled"), "threshold is exclusive");

    doc.set_scroll(51.0);
    page.on_scroll(&mut doc);
    assert!(doc.has_class(header, "scrolled"));

    doc.set_scroll(0.0);
    page.on_scroll(&mut doc);
    assert!(!doc.has_class(header, "scrolled"));
}

#[test]
fn test_reveal_is_one_shot() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let section = doc.query_id("destinations").unwrap();
    assert!(!doc.has_class(section, "active"), "starts off-screen");

    doc.set_scroll(400.0);
    page.on_scroll(&mut doc);
    assert!(doc.has_class(section, "active"));

    doc.set_scroll(0.0);
    page.on_scroll(&mut doc);
    assert!(doc.has_class(section, "active"), "revealing never reverts");
}

#[test]
fn test_counter_reaches_exact_formatted_target() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let counter = doc.query_class("counter-number")[0];

    // 12500 / 125 increments, one per frame
    for _ in 0..125 {
        page.on_frame(&mut doc).unwrap();
    }
    assert_eq!(doc.text(counter), "12,500");

    // Further frames leave the finished counter alone
    page.on_frame(&mut doc).unwrap();
    assert_eq!(doc.text(counter), "12,500");
}

#[test]
fn test_counter_display_is_monotonic() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let counter = doc.query_class("counter-number")[0];

    let mut previous = 0u64;
    for _ in 0..125 {
        page.on_frame(&mut doc).unwrap();
        let shown: u64 = doc.text(counter).replace(',', "").parse().unwrap();
        assert!(shown >= previous, "displayed value must never decrease");
        previous = shown;
    }
    assert_eq!(previous, 12500);
}

#[test]
fn test_anchor_click_glides_to_section() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let link = doc.query_class("nav-link")[0];
    let mut nav = RecordingNavigator::new();

    page.on_click(&mut doc, link, &mut nav);
    for _ in 0..300 {
        page.on_frame(&mut doc).unwrap();
    }
    assert!(
        (doc.viewport.scroll_y - 900.0).abs() < 0.5,
        "settled at {} instead of the section top",
        doc.viewport.scroll_y
    );
}

#[test]
fn test_form_submit_composes_mailto() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let form = doc.query_id("contact-form").unwrap();
    let mut nav = RecordingNavigator::new();

    page.on_submit(&doc, form, &mut nav);

    let uri = nav.last().unwrap();
    assert!(uri.starts_with("mailto:info@mohamedali.site?"));
    let body = urlencoding::decode(uri.split("&body=").nth(1).unwrap()).unwrap();
    assert_eq!(body, "Name: Jane Doe\nEmail: jane@x.com\nMessage: Hi\nthere");
}

#[test]
fn test_service_button_composes_inquiry() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let button = doc.query_class("service-cta")[0];
    let mut nav = RecordingNavigator::new();

    page.on_click(&mut doc, button, &mut nav);
    assert!(nav
        .last()
        .unwrap()
        .contains("Inquiry%20about%20Flight%20Booking"));
}

#[test]
fn test_fallback_widget_tracks_scroll() {
    let mut doc = full_document();
    let mut page = mount_without_3d(&mut doc);
    let container = doc.query_id("airplane-canvas").unwrap();
    assert!(page.is_fallback());
    assert!(doc.text(container).contains("<svg"));

    doc.set_scroll(doc.max_scroll());
    page.on_scroll(&mut doc);
    let style = doc.attribute(container, "style").unwrap();
    assert_eq!(style, "transform: translate(200.0px, 50.0px) rotate(10.0deg)");
}

#[test]
fn test_three_d_widget_renders_frames() {
    let mut doc = full_document();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let surface = PixmapSurface::new(16, 16).unwrap();
    let mut page = Page::mount(
        &mut doc,
        Box::new(surface),
        &PageConfig::default(),
        &mut rng,
    );
    assert!(!page.is_fallback());

    doc.set_scroll(1400.0);
    page.on_scroll(&mut doc);
    page.on_pointer_entered();
    page.on_pointer_moved(&doc, 640.0, 345.0);
    for _ in 0..5 {
        page.on_frame(&mut doc).unwrap();
    }
    page.on_pointer_left();
    page.on_frame(&mut doc).unwrap();
}
