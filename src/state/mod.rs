//! Browser-free state machines behind each page widget.
//!
//! DESIGN
//! ======
//! Everything with multi-step state or timing lives here, split by widget so
//! each model stays small and natively testable. The `dom` modules own the
//! corresponding web-sys wiring and hold no logic of their own.

pub mod accordion;
pub mod contact;
pub mod nav;
pub mod stats;
