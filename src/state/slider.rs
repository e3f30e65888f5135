//! Circular slide cursor.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Cursor over a fixed number of slides.
///
/// `index` is always in `[0, len)` when `len > 0`; an empty slider ignores
/// every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderState {
    len: usize,
    index: usize,
}

impl SliderState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to `target`, wrapping into range. Returns the new index, or
    /// `None` when there are no slides.
    pub fn go_to(&mut self, target: i64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = i64::try_from(self.len).unwrap_or(i64::MAX);
        let wrapped = target.rem_euclid(len);
        self.index = usize::try_from(wrapped).unwrap_or(0);
        Some(self.index)
    }

    /// Move `step` slides forward (negative for backward).
    pub fn advance(&mut self, step: i64) -> Option<usize> {
        let current = i64::try_from(self.index).unwrap_or(0);
        self.go_to(current.saturating_add(step))
    }

    /// CSS transform placing the current slide in view.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
