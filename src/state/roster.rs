//! Roster filtering by role facet and name query.
//!
//! Visibility is recomputed from scratch on every call to [`RosterFilter::apply`];
//! nothing is patched incrementally.

use crate::consts::ROLE_ALL;

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

/// One player card as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterEntry {
    pub display_name: String,
    pub role: String,
    pub image_ref: String,
    pub meta_text: String,
}

/// Role facet. `"all"`, an empty role, or a missing role disables the facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

impl RoleFilter {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | ROLE_ALL) => Self::All,
            Some(role) => Self::Only(role.to_owned()),
        }
    }

    #[must_use]
    pub fn matches(&self, role: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == role,
        }
    }
}

/// Result of one filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Per-entry visibility, index-aligned with the roster.
    pub visible: Vec<bool>,
}

impl FilterOutcome {
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.visible.iter().any(|shown| *shown)
    }

    /// Whether the "not found" notice should be shown.
    #[must_use]
    pub fn show_not_found(&self) -> bool {
        !self.any_visible()
    }
}

/// Roster plus the single-select role button group.
#[derive(Clone, Debug, Default)]
pub struct RosterFilter {
    entries: Vec<RosterEntry>,
    /// Role carried by each filter button, in button order.
    button_roles: Vec<RoleFilter>,
    active_button: Option<usize>,
}

impl RosterFilter {
    #[must_use]
    pub fn new(entries: Vec<RosterEntry>, button_roles: Vec<RoleFilter>, active_button: Option<usize>) -> Self {
        let active_button = active_button.filter(|i| *i < button_roles.len());
        Self { entries, button_roles, active_button }
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    /// Role of the active button, or [`RoleFilter::All`] when none is active.
    #[must_use]
    pub fn active_role(&self) -> RoleFilter {
        self.active_button
            .and_then(|i| self.button_roles.get(i))
            .cloned()
            .unwrap_or_default()
    }

    /// Filter with an explicit role and query.
    #[must_use]
    pub fn apply(&self, role: &RoleFilter, query: &str) -> FilterOutcome {
        let needle = query.to_lowercase();
        let visible = self
            .entries
            .iter()
            .map(|entry| {
                role.matches(&entry.role) && (needle.is_empty() || entry.display_name.to_lowercase().contains(&needle))
            })
            .collect();
        FilterOutcome { visible }
    }

    /// A role button was clicked: it becomes the only active button, and the
    /// roster is filtered by its role and the current query.
    pub fn select_button(&mut self, button: usize, query: &str) -> Option<FilterOutcome> {
        if button >= self.button_roles.len() {
            return None;
        }
        self.active_button = Some(button);
        log::debug!("fanzone: roster role -> {:?}", self.active_role());
        Some(self.apply(&self.active_role(), query.trim()))
    }

    /// The search field changed: filter by the active role and new query.
    #[must_use]
    pub fn search(&self, query: &str) -> FilterOutcome {
        self.apply(&self.active_role(), query.trim())
    }
}
