//! Browser bindings for each widget.
//!
//! Every module follows the same two steps: `locate` gathers the elements
//! the widget needs from the document (returning `None` when the page does
//! not have the widget), and `attach` wires listeners and timers around the
//! matching core from [`crate::state`].

pub mod comments;
pub mod contact;
pub mod countdown;
pub mod form;
pub mod lead_popup;
pub mod nav;
pub mod overlay;
pub mod poll;
pub mod roster;
pub mod roster_modal;
pub mod schedule;
pub mod slider;
pub mod stats;
pub mod toast;
