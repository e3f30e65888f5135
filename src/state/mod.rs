//! Widget cores.
//!
//! DESIGN
//! ======
//! Each widget keeps its state in a plain struct with no browser types, so the
//! behavior is testable natively. The matching module under
//! [`crate::components`] owns the elements and mirrors core state onto them.

pub mod comments;
pub mod countdown;
pub mod forms;
pub mod nav;
pub mod overlay;
pub mod poll;
pub mod roster;
pub mod schedule;
pub mod slider;
pub mod stats;
