use super::narrator::{NarrationScheduler, Priority};
use std::sync::Arc;
use tracing::debug;

/// One on-page focus target and its tip, discovered by the host page and
/// already localized to the page's language.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TourStop {
    pub target: String,
    pub tip: String,
}

/// Steps through a page's focus targets, narrating each tip through the
/// shared narration channel.
///
/// The tour never runs on the same page as an active transaction flow; the
/// scheduler's single-channel cancel rule keeps them from talking over
/// each other regardless.
pub struct GuidedTour {
    narrator: Arc<NarrationScheduler>,
    stops: Vec<TourStop>,
    index: usize,
    active: bool,
    /// Tips can be muted without disabling the app-wide narrator.
    narrating: bool,
}

impl GuidedTour {
    pub fn new(narrator: Arc<NarrationScheduler>) -> Self {
        Self {
            narrator,
            stops: Vec::new(),
            index: 0,
            active: false,
            narrating: true,
        }
    }

    /// Replaces the stop list on a route change and restarts from the
    /// first stop.
    pub fn load_stops(&mut self, stops: Vec<TourStop>) {
        self.stops = stops;
        self.index = 0;
        if self.active {
            self.announce();
        }
    }

    pub fn start(&mut self) {
        self.active = true;
        self.index = 0;
        debug!(stops = self.stops.len(), "tour started");
        self.announce();
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.index = 0;
    }

    /// Advances to the next stop, clamped at the last one; no wraparound.
    pub fn next(&mut self) {
        if !self.active || self.stops.is_empty() {
            return;
        }
        if self.index + 1 < self.stops.len() {
            self.index += 1;
            self.announce();
        }
    }

    pub fn set_narrating(&mut self, narrating: bool) {
        self.narrating = narrating;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&TourStop> {
        if self.active {
            self.stops.get(self.index)
        } else {
            None
        }
    }

    fn announce(&self) {
        if !self.narrating {
            return;
        }
        if let Some(stop) = self.stops.get(self.index) {
            self.narrator.speak(&stop.tip, Priority::High);
        }
    }
}
