//! Keyboard input from crossterm events
//!
//! Terminals report key presses, not key state. Each key remembers the frame
//! it was last pressed or repeated; a key counts as held while that stamp is
//! within [`HOLD_WINDOW`] frames. Terminals that report releases (kitty
//! keyboard protocol) drop the key immediately instead.
//!
//! Start is a one-shot latched from presses, not derived from the held level.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{InputSource, axis_from_held};

/// Frames a press keeps a key "held" without a repeat.
///
/// Once OS key repeat kicks in (15 Hz or faster) it refreshes the stamp
/// inside this window. The initial repeat delay (250-600 ms) is longer, so on
/// terminals without release events a held arrow stops for that gap after
/// the first press.
pub const HOLD_WINDOW: u64 = 8;

/// Frames after the last Space event during which another press counts as
/// key repeat. Covers the initial repeat delay; terminals without release
/// events report repeats as presses.
pub const REPEAT_DELAY_WINDOW: u64 = 40;

/// Read terminal events on a dedicated thread so the frame loop never blocks
pub fn spawn_event_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped, program exiting
            }
        }
    });
    rx
}

/// Keyboard-backed [`InputSource`]
pub struct KeyboardInput {
    rx: mpsc::Receiver<Event>,
    /// Each held key -> frame it was last seen
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    start_latched: bool,
    quit: bool,
    pause_toggled: bool,
}

impl KeyboardInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        Self {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
            start_latched: false,
            quit: false,
            pause_toggled: false,
        }
    }

    /// Drain pending events; call once per frame before sampling
    pub fn poll(&mut self) {
        self.frame += 1;
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(key) = ev {
                self.handle_key(key);
            }
        }
    }

    fn handle_key(&mut self, KeyEvent { code, kind, modifiers, .. }: KeyEvent) {
        let code = normalize(code);
        match kind {
            KeyEventKind::Press => {
                let last = self.key_frame.insert(code, self.frame);
                match code {
                    KeyCode::Char(' ') => {
                        let repeating = last
                            .is_some_and(|f| self.frame.saturating_sub(f) <= REPEAT_DELAY_WINDOW);
                        if !repeating {
                            self.start_latched = true;
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char('p') => self.pause_toggled = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// True once per press of the pause key
    pub fn take_pause_toggle(&mut self) -> bool {
        std::mem::take(&mut self.pause_toggled)
    }
}

/// Fold letter case and the WASD aliases onto one key each
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => KeyCode::Left,
            'd' => KeyCode::Right,
            lower => KeyCode::Char(lower),
        },
        other => other,
    }
}

impl InputSource for KeyboardInput {
    fn start_pressed(&mut self) -> bool {
        std::mem::take(&mut self.start_latched)
    }

    fn horizontal_axis(&mut self) -> i8 {
        axis_from_held(self.is_held(KeyCode::Left), self.is_held(KeyCode::Right))
    }
}
