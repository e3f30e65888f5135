//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `escape` is pure and used by the state cores; `dom` isolates the web-sys
//! plumbing so component modules read as wiring only.

pub mod dom;
pub mod escape;
