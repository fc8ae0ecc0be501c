use crate::WindowRange;

/// Where a window controller is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The collection was just (re)populated; passes repeat until the range settles.
    #[default]
    Startup,
    /// Steady state: passes run only on external triggers.
    Stable,
}

/// The controller's memory between passes.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Range emitted by the last pass that changed it. `None` until then, and for the
    /// "no renderable window" sentinel.
    pub previous: Option<WindowRange>,
    pub phase: Phase,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_startup(&self) -> bool {
        self.phase == Phase::Startup
    }

    /// Forgets the previous range, so the next pass reports its range as changed.
    pub fn clear_range(&mut self) {
        self.previous = None;
    }

    /// Fresh list: forget the range and loop again until it settles.
    pub fn restart(&mut self) {
        self.previous = None;
        self.phase = Phase::Startup;
    }

    /// Stores `next` and reports whether it differs from the previous range.
    pub fn record(&mut self, next: Option<WindowRange>) -> bool {
        if self.previous == next {
            return false;
        }
        self.previous = next;
        true
    }
}
