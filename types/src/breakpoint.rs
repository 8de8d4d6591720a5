//! Breakpoint layout-transition detection.
//!
//! A resize stream is continuous; layout changes are discrete. The detector
//! watches a width measurement on every observation and reports only the
//! moments the width crosses the breakpoint, so downstream code reacts to
//! "the layout just became compact" instead of every wiggle of the terminal.

use thiserror::Error;

/// Layout classification relative to a [`Breakpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Width below the breakpoint.
    Compact,
    /// Width at or above the breakpoint.
    Wide,
}

impl LayoutMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Compact => "Compact",
            LayoutMode::Wide => "Wide",
        }
    }
}

#[derive(Debug, Error)]
#[error("breakpoint must be at least one column")]
pub struct BreakpointError;

/// Width threshold separating the two layout modes, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u16);

impl Breakpoint {
    pub fn new(columns: u16) -> Result<Self, BreakpointError> {
        if columns == 0 {
            return Err(BreakpointError);
        }
        Ok(Self(columns))
    }

    #[must_use]
    pub fn columns(self) -> u16 {
        self.0
    }

    /// Width equal to the breakpoint counts as wide.
    #[must_use]
    pub fn classify(self, width: u16) -> LayoutMode {
        if width < self.0 {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

impl Default for Breakpoint {
    /// 80 columns, the conventional wide/narrow terminal boundary.
    fn default() -> Self {
        Self(80)
    }
}

/// Stateful filter that turns width observations into mode transitions.
///
/// `mode` is `None` until the first observation, which therefore always
/// reports a transition. A single `Option<LayoutMode>` holds the current
/// side of the breakpoint, so the detector can never claim to be in both
/// modes at once.
#[derive(Debug)]
pub struct LayoutDetector {
    breakpoint: Breakpoint,
    mode: Option<LayoutMode>,
}

impl LayoutDetector {
    #[must_use]
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            mode: None,
        }
    }

    /// Record a width measurement.
    ///
    /// Returns `Some(mode)` only when the observation moved the detector to
    /// the other side of the breakpoint (or was the first observation);
    /// returns `None` while the mode is unchanged.
    pub fn observe(&mut self, width: u16) -> Option<LayoutMode> {
        let next = self.breakpoint.classify(width);
        if self.mode == Some(next) {
            return None;
        }
        self.mode = Some(next);
        Some(next)
    }

    /// Current mode, `None` before the first observation.
    #[must_use]
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

/// Build a resize handler that fires `on_compact`/`on_wide` on transitions.
///
/// The returned handler owns its [`LayoutDetector`], measures the width
/// supplied with each event, and invokes exactly one of the two actions per
/// transition, passing along the triggering event. Repeated observations on
/// the same side of the breakpoint invoke nothing.
pub fn on_layout_change<E, C, W>(
    breakpoint: Breakpoint,
    mut on_compact: C,
    mut on_wide: W,
) -> impl FnMut(&E, u16)
where
    C: FnMut(&E, u16),
    W: FnMut(&E, u16),
{
    let mut detector = LayoutDetector::new(breakpoint);
    move |event, width| match detector.observe(width) {
        Some(LayoutMode::Compact) => on_compact(event, width),
        Some(LayoutMode::Wide) => on_wide(event, width),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, LayoutDetector, LayoutMode, on_layout_change};
    use std::cell::RefCell;

    fn bp(columns: u16) -> Breakpoint {
        Breakpoint::new(columns).unwrap()
    }

    #[test]
    fn zero_columns_is_rejected() {
        assert!(Breakpoint::new(0).is_err());
    }

    #[test]
    fn width_equal_to_breakpoint_is_wide() {
        assert_eq!(bp(769).classify(769), LayoutMode::Wide);
        assert_eq!(bp(769).classify(768), LayoutMode::Compact);
    }

    #[test]
    fn first_observation_always_transitions() {
        let mut detector = LayoutDetector::new(bp(80));
        assert_eq!(detector.mode(), None);
        assert_eq!(detector.observe(100), Some(LayoutMode::Wide));
        assert_eq!(detector.mode(), Some(LayoutMode::Wide));
    }

    #[test]
    fn repeated_same_side_observations_are_silent() {
        let mut detector = LayoutDetector::new(bp(80));
        assert_eq!(detector.observe(40), Some(LayoutMode::Compact));
        assert_eq!(detector.observe(50), None);
        assert_eq!(detector.observe(79), None);
        assert_eq!(detector.observe(80), Some(LayoutMode::Wide));
        assert_eq!(detector.observe(120), None);
    }

    #[test]
    fn transitions_count_crossings_not_observations() {
        // Widths [800, 750, 760, 700, 900] against 769: wide, compact,
        // (no-op), (no-op), wide. Three invocations total.
        let log = RefCell::new(Vec::new());
        {
            let mut handler = on_layout_change(
                bp(769),
                |_: &(), w| log.borrow_mut().push((LayoutMode::Compact, w)),
                |_: &(), w| log.borrow_mut().push((LayoutMode::Wide, w)),
            );
            for width in [800, 750, 760, 700, 900] {
                handler(&(), width);
            }
        }
        assert_eq!(
            log.into_inner(),
            vec![
                (LayoutMode::Wide, 800),
                (LayoutMode::Compact, 750),
                (LayoutMode::Wide, 900),
            ]
        );
    }

    #[test]
    fn handler_passes_the_triggering_event_through() {
        let seen = RefCell::new(Vec::new());
        {
            let mut handler = on_layout_change(
                bp(10),
                |e: &&str, _| seen.borrow_mut().push(*e),
                |e: &&str, _| seen.borrow_mut().push(*e),
            );
            handler(&"first", 5);
            handler(&"second", 5);
            handler(&"third", 20);
        }
        assert_eq!(seen.into_inner(), vec!["first", "third"]);
    }
}
