//! Open/closed state shared by every popup on the site.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Inline `display` for an open overlay.
pub const DISPLAY_OPEN: &str = "flex";
/// Inline `display` for a closed overlay.
pub const DISPLAY_CLOSED: &str = "none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// One popup instance. The roster modal, lead popup, and both success
/// overlays are all driven through this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    name: &'static str,
    state: OverlayState,
}

impl Overlay {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, state: OverlayState::Closed }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn open(&mut self) {
        self.state = OverlayState::Open;
    }

    pub fn close(&mut self) {
        self.state = OverlayState::Closed;
    }

    /// A click landed inside the overlay. Only a click on the backdrop
    /// itself dismisses it; clicks bubbling up from the content do not.
    /// The backdrop may have been shown by a stylesheet or other script, so
    /// the recorded state is not consulted. Returns whether to hide it.
    pub fn backdrop_click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop {
            self.close();
        }
        on_backdrop
    }

    #[must_use]
    pub fn display(&self) -> &'static str {
        match self.state {
            OverlayState::Open => DISPLAY_OPEN,
            OverlayState::Closed => DISPLAY_CLOSED,
        }
    }
}
