//! Pointer-region transition detection.
//!
//! Same shape as the breakpoint detector, generalized to two dimensions:
//! given any rectangular region of the screen, report only the moments the
//! pointer enters or leaves it, not every motion event.

/// A rectangle in cell coordinates, half-open on the far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionEvent {
    Entered,
    Exited,
}

/// Emits [`RegionEvent`]s only when the observed position crosses the
/// region boundary. `inside` is `None` before the first observation, so the
/// first position always reports either `Entered` or `Exited`.
#[derive(Debug)]
pub struct RegionDetector {
    region: Region,
    inside: Option<bool>,
}

impl RegionDetector {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            inside: None,
        }
    }

    pub fn observe(&mut self, column: u16, row: u16) -> Option<RegionEvent> {
        let now_inside = self.region.contains(column, row);
        if self.inside == Some(now_inside) {
            return None;
        }
        self.inside = Some(now_inside);
        Some(if now_inside {
            RegionEvent::Entered
        } else {
            RegionEvent::Exited
        })
    }

    /// Whether the last observed position was inside the region.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside == Some(true)
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::{Region, RegionDetector, RegionEvent};

    #[test]
    fn far_edges_are_exclusive() {
        let region = Region::new(0, 0, 10, 5);
        assert!(region.contains(0, 0));
        assert!(region.contains(9, 4));
        assert!(!region.contains(10, 4));
        assert!(!region.contains(9, 5));
    }

    #[test]
    fn emits_only_on_boundary_crossings() {
        let mut detector = RegionDetector::new(Region::new(0, 0, 10, 10));
        assert_eq!(detector.observe(5, 5), Some(RegionEvent::Entered));
        assert_eq!(detector.observe(6, 6), None);
        assert_eq!(detector.observe(20, 20), Some(RegionEvent::Exited));
        assert_eq!(detector.observe(30, 3), None);
        assert_eq!(detector.observe(1, 1), Some(RegionEvent::Entered));
    }

    #[test]
    fn first_observation_outside_reports_exited() {
        let mut detector = RegionDetector::new(Region::new(0, 0, 4, 4));
        assert_eq!(detector.observe(40, 40), Some(RegionEvent::Exited));
        assert!(!detector.is_inside());
    }
}
