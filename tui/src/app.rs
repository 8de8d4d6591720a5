//! Demo application state.
//!
//! Deliberately thin: everything in here is driven by [`DerivedEvent`]s, so
//! the state never has to interpret raw key or resize events itself.

use sift_types::{Breakpoint, LayoutMode, Region, RegionEvent};

use crate::dispatch::DerivedEvent;

#[derive(Debug)]
pub struct App {
    breakpoint: Breakpoint,
    pointer_region: Region,
    ascii_only: bool,
    layout: Option<LayoutMode>,
    width: u16,
    emphasis: bool,
    pointer_inside: bool,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(breakpoint: Breakpoint, pointer_region: Region, ascii_only: bool) -> Self {
        Self {
            breakpoint,
            pointer_region,
            ascii_only,
            layout: None,
            width: 0,
            emphasis: false,
            pointer_inside: false,
            should_quit: false,
        }
    }

    pub fn apply(&mut self, event: DerivedEvent) {
        match event {
            DerivedEvent::LayoutChanged { mode, width } => {
                self.layout = Some(mode);
                self.width = width;
            }
            DerivedEvent::ToggleEmphasis => {
                self.emphasis = !self.emphasis;
            }
            DerivedEvent::PointerRegion { event, .. } => {
                self.pointer_inside = event == RegionEvent::Entered;
            }
            DerivedEvent::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Layout mode, `None` until the first width observation arrives.
    #[must_use]
    pub fn layout(&self) -> Option<LayoutMode> {
        self.layout
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    #[must_use]
    pub fn pointer_region(&self) -> Region {
        self.pointer_region
    }

    #[must_use]
    pub fn emphasis(&self) -> bool {
        self.emphasis
    }

    #[must_use]
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.ascii_only
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::dispatch::DerivedEvent;
    use sift_types::{Breakpoint, LayoutMode, Region, RegionEvent};

    fn app() -> App {
        App::new(
            Breakpoint::new(80).unwrap(),
            Region::new(0, 0, 10, 5),
            false,
        )
    }

    #[test]
    fn layout_updates_from_derived_events() {
        let mut app = app();
        assert_eq!(app.layout(), None);
        app.apply(DerivedEvent::LayoutChanged {
            mode: LayoutMode::Compact,
            width: 60,
        });
        assert_eq!(app.layout(), Some(LayoutMode::Compact));
        assert_eq!(app.width(), 60);
    }

    #[test]
    fn emphasis_toggles() {
        let mut app = app();
        app.apply(DerivedEvent::ToggleEmphasis);
        assert!(app.emphasis());
        app.apply(DerivedEvent::ToggleEmphasis);
        assert!(!app.emphasis());
    }

    #[test]
    fn pointer_flag_follows_crossings() {
        let mut app = app();
        app.apply(DerivedEvent::PointerRegion {
            event: RegionEvent::Entered,
            column: 1,
            row: 1,
        });
        assert!(app.pointer_inside());
        app.apply(DerivedEvent::PointerRegion {
            event: RegionEvent::Exited,
            column: 50,
            row: 1,
        });
        assert!(!app.pointer_inside());
    }

    #[test]
    fn quit_sets_the_flag() {
        let mut app = app();
        app.apply(DerivedEvent::Quit);
        assert!(app.should_quit());
    }
}
