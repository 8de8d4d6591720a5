//! Derived event streams.
//!
//! Raw terminal events (`Key`, `Resize`, `Mouse`) are routed through composed
//! handlers which refine them into [`DerivedEvent`]s on a channel. Consumers
//! drain the channel and never look at the raw stream: they care that the
//! layout just changed, not that the terminal is mid-resize.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use sift_types::{
    Breakpoint, LayoutMode, Region, RegionDetector, RegionEvent, guarded, on_layout_change,
};

/// Refined events emitted by the composed handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedEvent {
    /// The width crossed the breakpoint (or was measured for the first time).
    LayoutChanged { mode: LayoutMode, width: u16 },
    /// The pointer crossed the watched region's boundary.
    PointerRegion {
        event: RegionEvent,
        column: u16,
        row: u16,
    },
    /// One of the bound toggle keys was pressed.
    ToggleEmphasis,
    Quit,
}

type KeyHandler = Box<dyn FnMut(&KeyEvent) + Send>;
type ResizeHandler = Box<dyn FnMut(&Event, u16) + Send>;

/// Owns the composed handlers and the derived-event channel.
pub struct EventStreams {
    key_handlers: Vec<KeyHandler>,
    resize: ResizeHandler,
    pointer: RegionDetector,
    tx: mpsc::UnboundedSender<DerivedEvent>,
    rx: mpsc::UnboundedReceiver<DerivedEvent>,
}

/// Key press or key repeat (the `keydown` side of the stream; releases are
/// only delivered under the kitty protocol and are ignored either way).
fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

fn is_quit_key(key: &KeyEvent) -> bool {
    is_press(key)
        && (key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

impl EventStreams {
    /// Compose the demo's handlers: three guarded toggle keys, a quit guard,
    /// a breakpoint watcher on resize, and a pointer-region watcher.
    #[must_use]
    pub fn new(breakpoint: Breakpoint, pointer_region: Region) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Each binding is an independent guarded handler, mirroring the list
        // of per-key predicates all mapped onto the same action.
        let toggle_keys = [KeyCode::Char('s'), KeyCode::Enter, KeyCode::Up];
        let mut key_handlers: Vec<KeyHandler> = toggle_keys
            .into_iter()
            .map(|code| {
                let tx = tx.clone();
                Box::new(guarded(
                    move |key: &KeyEvent| is_press(key) && key.code == code,
                    move |_: &KeyEvent| {
                        let _ = tx.send(DerivedEvent::ToggleEmphasis);
                    },
                )) as KeyHandler
            })
            .collect();

        let quit_tx = tx.clone();
        key_handlers.push(Box::new(guarded(is_quit_key, move |_: &KeyEvent| {
            let _ = quit_tx.send(DerivedEvent::Quit);
        })));

        let compact_tx = tx.clone();
        let wide_tx = tx.clone();
        let resize: ResizeHandler = Box::new(on_layout_change(
            breakpoint,
            move |_: &Event, width| {
                let _ = compact_tx.send(DerivedEvent::LayoutChanged {
                    mode: LayoutMode::Compact,
                    width,
                });
            },
            move |_: &Event, width| {
                let _ = wide_tx.send(DerivedEvent::LayoutChanged {
                    mode: LayoutMode::Wide,
                    width,
                });
            },
        ));

        Self {
            key_handlers,
            resize,
            pointer: RegionDetector::new(pointer_region),
            tx,
            rx,
        }
    }

    /// Route one raw event through the composed handlers.
    pub fn route(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                for handler in &mut self.key_handlers {
                    handler(key);
                }
            }
            Event::Resize(columns, _) => {
                (self.resize)(event, *columns);
            }
            Event::Mouse(mouse)
                if matches!(
                    mouse.kind,
                    MouseEventKind::Moved | MouseEventKind::Drag(_)
                ) =>
            {
                if let Some(crossing) = self.pointer.observe(mouse.column, mouse.row) {
                    debug!(column = mouse.column, row = mouse.row, ?crossing, "Pointer region crossing");
                    let _ = self.tx.send(DerivedEvent::PointerRegion {
                        event: crossing,
                        column: mouse.column,
                        row: mouse.row,
                    });
                }
            }
            _ => {}
        }
    }

    /// Feed the breakpoint watcher a measurement outside the raw stream.
    ///
    /// Used once at startup so the first frame already has a layout mode,
    /// the same trick as firing a synthetic resize on page load.
    pub fn observe_width(&mut self, width: u16) {
        (self.resize)(&Event::Resize(width, 0), width);
    }

    /// Next derived event, if one is queued.
    pub fn try_next(&mut self) -> Option<DerivedEvent> {
        self.rx.try_recv().ok()
    }
}
