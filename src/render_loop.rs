//! The per-frame clear cycle.

use input::{Button, CloseEvent, Event, Key, PressEvent};
use rand::Rng;
use window::Window;

use crate::clear::{ClearColor, ClearTarget};
use crate::settings::COLOR_CHANGE_INTERVAL;

/// Drives a window and clears it to a random color every
/// [`COLOR_CHANGE_INTERVAL`] frames.
pub struct RenderLoop<W, T, R> {
    window: W,
    target: T,
    rng: R,
    tick: u64,
    color: Option<ClearColor>,
}

impl<W: Window, T: ClearTarget, R: Rng> RenderLoop<W, T, R> {
    /// Creates a loop that has not run any frame yet.
    pub fn new(window: W, target: T, rng: R) -> RenderLoop<W, T, R> {
        RenderLoop {
            window,
            target,
            rng,
            tick: 0,
            color: None,
        }
    }

    /// Index of the next frame.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The clear color last handed to the target, if any.
    pub fn clear_color(&self) -> Option<ClearColor> {
        self.color
    }

    /// The window being driven.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The target being cleared.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Picks a new random opaque color and sets it on the target.
    pub fn change_random_color(&mut self) -> ClearColor {
        let color = ClearColor::random(&mut self.rng);
        log::debug!(
            "clear color ({:.3}, {:.3}, {:.3}) at tick {}",
            color.r,
            color.g,
            color.b,
            self.tick
        );
        self.target.set_clear_color(color);
        self.color = Some(color);
        color
    }

    /// Reacts to a key press. Escape requests the window to close.
    pub fn handle_key(&mut self, key: Key) {
        log::trace!("key pressed: {key:?}");
        if key == Key::Escape {
            self.window.set_should_close(true);
        }
    }

    /// Dispatches key presses to [`handle_key`](Self::handle_key) and
    /// turns close requests into the close flag.
    pub fn handle_event(&mut self, event: &Event) {
        if let Some(Button::Keyboard(key)) = event.press_args() {
            self.handle_key(key);
        }
        if event.close_args().is_some() {
            self.window.set_should_close(true);
        }
    }

    /// Runs one frame.
    ///
    /// Returns `false` without doing anything once the close flag is set.
    pub fn run_frame(&mut self) -> bool {
        if self.window.should_close() {
            return false;
        }
        while let Some(event) = self.window.poll_event() {
            self.handle_event(&event);
        }
        self.window.swap_buffers();
        if self.tick % COLOR_CHANGE_INTERVAL == 0 {
            self.change_random_color();
        }
        self.target.clear();
        self.tick += 1;
        true
    }

    /// Runs frames until the window is asked to close.
    pub fn run(&mut self) {
        log::info!("render loop started");
        while self.run_frame() {}
        log::info!("render loop stopped after {} frames", self.tick);
    }
}
