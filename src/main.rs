use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::rc::Rc;

use almasa_page::cli::Cli;
use almasa_page::page::document::{Document, Element};
use almasa_page::render::{PixmapSurface, UnavailableSurface};
use almasa_page::scene::{Camera, Scene};
use almasa_page::traits::{Navigator, RenderSurface};
use almasa_page::types::Rect;
use almasa_page::{FrameLoop, Page, PageConfig};

/// Navigator that logs mailto URIs instead of opening a mail client
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&mut self, uri: &str) {
        info!("navigate -> {uri}");
    }
}

/// Render surface shared between the page and the demo, so the final frame
/// can be written out after the loop finishes
struct SharedSurface(Rc<RefCell<PixmapSurface>>);

impl RenderSurface for SharedSurface {
    fn is_available(&self) -> bool {
        true
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().resize(width, height);
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        self.0.borrow_mut().render(scene, camera)
    }
}

/// A representative Almasa landing page: header with mobile nav, the hero
/// airplane widget, reveal sections, statistics counters, service cards and
/// the contact form.
fn demo_document(width: f32, height: f32) -> Document {
    let mut doc = Document::new(width, height, 3600.0);

    doc.push(Element::new("header").with_class("header").with_rect(Rect::new(0.0, 0.0, width, 80.0)));
    doc.push(Element::new("button").with_class("menu-toggle"));
    doc.push(Element::new("ul").with_class("nav-menu"));
    for fragment in ["#destinations", "#services", "#contact"] {
        doc.push(Element::new("a").with_class("nav-link").with_attr("href", fragment));
    }

    doc.push(
        Element::new("div")
            .with_attr("id", "airplane-canvas")
            .with_rect(Rect::new(240.0, 120.0, 800.0, 450.0)),
    );

    for (i, target) in ["12500", "98", "40"].iter().enumerate() {
        doc.push(
            Element::new("span")
                .with_class("counter-number")
                .with_attr("data-target", target)
                .with_rect(Rect::new(100.0 + i as f32 * 300.0, 700.0, 200.0, 60.0)),
        );
    }

    doc.push(
        Element::new("section")
            .with_attr("id", "destinations")
            .with_class("reveal")
            .with_rect(Rect::new(0.0, 900.0, width, 600.0)),
    );
    doc.push(
        Element::new("section")
            .with_attr("id", "services")
            .with_class("reveal-left")
            .with_rect(Rect::new(0.0, 1600.0, width, 600.0)),
    );
    for service in ["Flight Booking", "Hotel Reservation"] {
        doc.push(
            Element::new("button")
                .with_class("service-cta")
                .with_attr("data-service", service)
                .with_rect(Rect::new(0.0, 1800.0, 300.0, 60.0)),
        );
    }

    doc.push(
        Element::new("section")
            .with_attr("id", "contact")
            .with_class("reveal")
            .with_rect(Rect::new(0.0, 2800.0, width, 600.0)),
    );
    doc.push(Element::new("form").with_attr("id", "contact-form"));
    doc.push(Element::new("input").with_attr("id", "name").with_attr("value", "Jane Doe"));
    doc.push(Element::new("input").with_attr("id", "email").with_attr("value", "jane@x.com"));
    doc.push(
        Element::new("textarea")
            .with_attr("id", "message")
            .with_attr("value", "Planning a trip to Aswan."),
    );

    doc
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut doc = demo_document(1280.0, 800.0);
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            PageConfig::from_json(&json)?
        }
        None => PageConfig {
            cloud_count: cli.clouds,
            ..PageConfig::default()
        },
    };

    let pixmap = Rc::new(RefCell::new(PixmapSurface::new(cli.width, cli.height)?));
    let surface: Box<dyn RenderSurface> = if cli.fallback {
        Box::new(UnavailableSurface)
    } else {
        Box::new(SharedSurface(Rc::clone(&pixmap)))
    };

    let mut page = Page::mount(&mut doc, surface, &config, &mut rng);
    info!(
        "mounted ({} controllers, fallback: {})",
        page.controller_count(),
        page.is_fallback()
    );

    // Scroll through the whole page over the simulated frames, hovering the
    // airplane for a stretch in the middle
    let total_frames = cli.frames;
    let max_scroll = doc.max_scroll();
    let mut frame_loop = FrameLoop::new(60.0);
    let stop = frame_loop.stop_handle();
    let mut nav = LogNavigator;
    let mut result = Ok(());

    let mut frame: u64 = 0;
    frame_loop.run(|_dt| {
        let progress = frame as f32 / total_frames.max(1) as f32;
        doc.set_scroll(progress * max_scroll);
        page.on_scroll(&mut doc);

        if frame == total_frames / 3 {
            page.on_pointer_entered();
        }
        if frame > total_frames / 3 && frame < 2 * total_frames / 3 {
            let sweep = frame as f32 / total_frames as f32;
            page.on_pointer_moved(&doc, 240.0 + 800.0 * sweep, 120.0 + 450.0 * sweep);
        }
        if frame == 2 * total_frames / 3 {
            page.on_pointer_left();
        }

        result = page.on_frame(&mut doc);
        frame += 1;
        if frame >= total_frames || result.is_err() {
            stop.stop();
        }
    });
    result?;

    for counter in doc.query_class("counter-number") {
        info!("counter finished at {}", doc.text(counter));
    }

    // Exercise both mailto paths once
    if let Some(form) = doc.query_id("contact-form") {
        page.on_submit(&doc, form, &mut nav);
    }
    if let Some(&button) = doc.query_class("service-cta").first() {
        page.on_click(&mut doc, button, &mut nav);
    }

    if cli.fallback {
        if let Some(container) = doc.query_id("airplane-canvas") {
            let mut out = doc.styles().join("\n");
            out.push('\n');
            out.push_str(doc.text(container));
            std::fs::write(&cli.out, out)
                .with_context(|| format!("writing {}", cli.out.display()))?;
            info!("fallback SVG written to {}", cli.out.display());
        }
    } else {
        pixmap.borrow().save_png(&cli.out)?;
        info!("final frame written to {}", cli.out.display());
    }

    Ok(())
}
