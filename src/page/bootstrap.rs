use anyhow::Result;
use log::info;
use rand::Rng;

use crate::animation::AnimationDriver;
use crate::config::PageConfig;
use crate::render::FallbackRenderer;
use crate::scene::{Camera, Scene};
use crate::traits::{Navigator, RenderSurface};

use super::contact::{ContactFormController, ServiceCtaController};
use super::counter::CounterController;
use super::document::{Document, ElementId};
use super::header::HeaderController;
use super::menu::MenuController;
use super::reveal::RevealController;
use super::smooth_scroll::SmoothScroll;

/// Classes the reveal observer watches
const REVEAL_CLASSES: [&str; 4] = ["reveal", "reveal-left", "reveal-right", "reveal-scale"];

/// The decorative airplane widget, 3D or flat depending on capability
enum AirplaneView {
    ThreeD {
        scene: Scene,
        camera: Camera,
        driver: AnimationDriver,
        surface: Box<dyn RenderSurface>,
        container: ElementId,
    },
    Fallback {
        renderer: FallbackRenderer,
        container: ElementId,
    },
}

/// The wired-up page: every controller that found its target elements, plus
/// the airplane widget. Controllers never call into one another; each event
/// entry point below fans out to whoever is interested.
pub struct Page {
    menu: Option<MenuController>,
    header: Option<HeaderController>,
    reveal: Option<RevealController>,
    counters: Option<CounterController>,
    smooth_scroll: SmoothScroll,
    contact: Option<ContactFormController>,
    service_cta: Option<ServiceCtaController>,
    airplane: Option<AirplaneView>,
}

impl Page {
    /// Wire all controllers against the document. A controller whose target
    /// elements are absent is simply not constructed; nothing here fails.
    pub fn mount(
        doc: &mut Document,
        mut surface: Box<dyn RenderSurface>,
        config: &PageConfig,
        rng: &mut impl Rng,
    ) -> Page {
        let menu = match (
            doc.query_class("menu-toggle").first().copied(),
            doc.query_class("nav-menu").first().copied(),
        ) {
            (Some(toggle), Some(nav)) => {
                Some(MenuController::new(toggle, nav, doc.query_class("nav-link")))
            }
            _ => None,
        };

        let header = doc
            .query_class("header")
            .first()
            .copied()
            .map(HeaderController::new);

        let mut revealables = Vec::new();
        for class in REVEAL_CLASSES {
            for el in doc.query_class(class) {
                if !revealables.contains(&el) {
                    revealables.push(el);
                }
            }
        }
        let reveal = (!revealables.is_empty()).then(|| RevealController::new(revealables));

        let counter_elements = doc.query_class("counter-number");
        let counters = (!counter_elements.is_empty()).then(|| CounterController::new(counter_elements));

        let mut anchor_links = Vec::new();
        for link in doc.query_tag("a") {
            let Some(href) = doc.attribute(link, "href") else {
                continue;
            };
            if let Some(fragment) = href.strip_prefix('#') {
                if !fragment.is_empty() {
                    if let Some(target) = doc.query_id(fragment) {
                        anchor_links.push((link, target));
                    }
                }
            }
        }
        let smooth_scroll = SmoothScroll::new(anchor_links);

        let contact = doc.query_id("contact-form").map(|form| {
            ContactFormController::new(
                form,
                config.recipient.clone(),
                doc.query_id("name"),
                doc.query_id("email"),
                doc.query_id("message"),
            )
        });

        let cta_buttons = doc.query_class("service-cta");
        let service_cta = (!cta_buttons.is_empty())
            .then(|| ServiceCtaController::new(cta_buttons, config.recipient.clone()));

        let airplane = doc.query_id("airplane-canvas").map(|container| {
            let rect = doc.rect(container);
            if surface.is_available() {
                let aspect = if rect.height > 0.0 {
                    rect.width / rect.height
                } else {
                    1.0
                };
                surface.resize(rect.width.max(1.0) as u32, rect.height.max(1.0) as u32);
                info!("airplane widget: 3D scene with {} clouds", config.cloud_count);
                AirplaneView::ThreeD {
                    scene: Scene::build(rng, config.cloud_count),
                    camera: Camera::new(aspect),
                    driver: AnimationDriver::new(),
                    surface,
                    container,
                }
            } else {
                info!("airplane widget: 3D unavailable, using SVG fallback");
                let renderer = FallbackRenderer::new();
                doc.set_text(container, &renderer.svg_markup());
                doc.push_style(renderer.keyframes_css());
                AirplaneView::Fallback {
                    renderer,
                    container,
                }
            }
        });

        let mut page = Page {
            menu,
            header,
            reveal,
            counters,
            smooth_scroll,
            contact,
            service_cta,
            airplane,
        };
        info!("page mounted with {} controllers", page.controller_count());

        // Observers fire once on registration for elements already in view
        page.on_scroll(doc);
        page
    }

    /// Number of controllers that found their elements
    pub fn controller_count(&self) -> usize {
        usize::from(self.menu.is_some())
            + usize::from(self.header.is_some())
            + usize::from(self.reveal.is_some())
            + usize::from(self.counters.is_some())
            + usize::from(self.smooth_scroll.link_count() > 0)
            + usize::from(self.contact.is_some())
            + usize::from(self.service_cta.is_some())
            + usize::from(self.airplane.is_some())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.airplane, Some(AirplaneView::Fallback { .. }))
    }

    /// Scroll event: header styling, reveal/counter triggers, and the
    /// airplane's scroll-derived animation targets
    pub fn on_scroll(&mut self, doc: &mut Document) {
        if let Some(header) = &self.header {
            header.on_scroll(doc);
        }
        if let Some(reveal) = &mut self.reveal {
            reveal.on_scroll(doc);
        }
        if let Some(counters) = &mut self.counters {
            counters.on_scroll(doc);
        }
        let fraction = doc.scroll_fraction();
        match &mut self.airplane {
            Some(AirplaneView::ThreeD { driver, .. }) => driver.set_scroll_fraction(fraction),
            Some(AirplaneView::Fallback {
                renderer,
                container,
            }) => {
                let style = renderer.scroll_transform(fraction);
                doc.set_attribute(*container, "style", &style);
            }
            None => {}
        }
    }

    /// One display frame: glide any pending smooth scroll, advance running
    /// counters, then animate and composite the 3D scene
    pub fn on_frame(&mut self, doc: &mut Document) -> Result<()> {
        if self.smooth_scroll.on_frame(doc) {
            self.on_scroll(doc);
        }
        if let Some(counters) = &mut self.counters {
            counters.on_frame(doc);
        }
        if let Some(AirplaneView::ThreeD {
            scene,
            camera,
            driver,
            surface,
            ..
        }) = &mut self.airplane
        {
            driver.advance(scene);
            surface.render(scene, camera)?;
        }
        Ok(())
    }

    pub fn on_click(&mut self, doc: &mut Document, target: ElementId, navigator: &mut dyn Navigator) {
        if let Some(menu) = &self.menu {
            menu.on_click(doc, target);
        }
        self.smooth_scroll.on_click(doc, target);
        if let Some(cta) = &self.service_cta {
            cta.on_click(doc, target, navigator);
        }
    }

    pub fn on_submit(&mut self, doc: &Document, form: ElementId, navigator: &mut dyn Navigator) {
        if let Some(contact) = &self.contact {
            contact.on_submit(doc, form, navigator);
        }
    }

    pub fn on_pointer_entered(&mut self) {
        if let Some(AirplaneView::ThreeD { driver, .. }) = &mut self.airplane {
            driver.pointer_entered();
        }
    }

    /// Pointer position in page coordinates, normalized against the widget
    /// container before it reaches the driver
    pub fn on_pointer_moved(&mut self, doc: &Document, x: f32, y: f32) {
        if let Some(AirplaneView::ThreeD {
            driver, container, ..
        }) = &mut self.airplane
        {
            let rect = doc.rect(*container);
            if rect.width > 0.0 && rect.height > 0.0 {
                let x_norm = (x - rect.x) / rect.width - 0.5;
                let y_norm = (y - rect.y) / rect.height - 0.5;
                driver.pointer_moved(x_norm, y_norm);
            }
        }
    }

    pub fn on_pointer_left(&mut self) {
        if let Some(AirplaneView::ThreeD { driver, .. }) = &mut self.airplane {
            driver.pointer_left();
        }
    }

    /// Viewport resize: keep the camera aspect and surface size in step with
    /// the widget container
    pub fn on_resize(&mut self, doc: &mut Document, width: f32, height: f32) {
        doc.viewport.width = width;
        doc.viewport.height = height;
        if let Some(AirplaneView::ThreeD {
            camera,
            surface,
            container,
            ..
        }) = &mut self.airplane
        {
            let rect = doc.rect(*container);
            if rect.height > 0.0 {
                camera.set_aspect(rect.width / rect.height);
                surface.resize(rect.width.max(1.0) as u32, rect.height.max(1.0) as u32);
            }
        }
    }
}
