//! Hamburger menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

/// Mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavMenu {
    state: NavState,
    breakpoint_px: f64,
}

impl NavMenu {
    /// `initially_expanded` reflects the menu's inline `display` at load.
    #[must_use]
    pub fn new(breakpoint_px: f64, initially_expanded: bool) -> Self {
        let state = if initially_expanded { NavState::Expanded } else { NavState::Collapsed };
        Self { state, breakpoint_px }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn toggle(&mut self) -> NavState {
        self.state = match self.state {
            NavState::Expanded => NavState::Collapsed,
            NavState::Collapsed => NavState::Expanded,
        };
        self.state
    }

    /// Viewport resized. Wide viewports always show the menu; narrow ones
    /// keep whatever the user chose. Returns whether the menu must be forced
    /// open.
    pub fn resize(&mut self, viewport_px: f64) -> bool {
        if viewport_px > self.breakpoint_px {
            self.state = NavState::Expanded;
            return true;
        }
        false
    }
}
