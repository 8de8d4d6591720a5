//! Core event-refinement logic for Sift.
//!
//! This crate contains pure combinators and detectors with no IO, no async,
//! and no terminal dependencies. Everything here is generic over the event
//! type, so it can be driven from any event source.

mod breakpoint;
mod guard;
mod region;

pub use breakpoint::{Breakpoint, BreakpointError, LayoutDetector, LayoutMode, on_layout_change};
pub use guard::{fork, guarded};
pub use region::{Region, RegionDetector, RegionEvent};
