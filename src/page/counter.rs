use log::warn;

use crate::math::format_thousands;

use super::document::{Document, ElementId};

/// Visibility fraction that starts a counter
const COUNTER_THRESHOLD: f32 = 0.5;
/// Animation duration in milliseconds at 16ms-equivalent ticks
const DURATION_MS: f64 = 2000.0;
const TICK_MS: f64 = 16.0;

/// One running count-up
#[derive(Debug)]
struct RunningCounter {
    el: ElementId,
    current: f64,
    increment: f64,
    target: u64,
}

/// Animated statistics counters. Each watched element starts counting from 0
/// the first time half of it is visible, advancing by target/125 per frame
/// until it lands exactly on the target read from its `data-target`
/// attribute. Triggers once per element, then stops observing it.
#[derive(Debug)]
pub struct CounterController {
    watching: Vec<ElementId>,
    running: Vec<RunningCounter>,
}

impl CounterController {
    pub fn new(elements: Vec<ElementId>) -> Self {
        Self {
            watching: elements,
            running: Vec::new(),
        }
    }

    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Start counters whose elements crossed the visibility threshold
    pub fn on_scroll(&mut self, doc: &mut Document) {
        let running = &mut self.running;
        self.watching.retain(|&el| {
            if doc.visible_ratio(el, 0.0) < COUNTER_THRESHOLD {
                return true;
            }
            match doc.attribute(el, "data-target").map(str::parse::<u64>) {
                Some(Ok(target)) => {
                    running.push(RunningCounter {
                        el,
                        current: 0.0,
                        increment: target as f64 / (DURATION_MS / TICK_MS),
                        target,
                    });
                }
                _ => warn!("counter element without a numeric data-target"),
            }
            false
        });
    }

    /// Advance every running counter by one tick
    pub fn on_frame(&mut self, doc: &mut Document) {
        self.running.retain_mut(|counter| {
            counter.current += counter.increment;
            if counter.current < counter.target as f64 {
                let shown = counter.current.ceil() as u64;
                doc.set_text(counter.el, &format_thousands(shown));
                true
            } else {
                doc.set_text(counter.el, &format_thousands(counter.target));
                false
            }
        });
    }
}
