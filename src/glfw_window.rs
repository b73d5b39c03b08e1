//! The GLFW window back-end.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Context as _, Result};
use glfw::{Context, Glfw, GlfwReceiver, PWindow, WindowEvent, WindowHint};
use input::{Button, ButtonArgs, ButtonState, CloseArgs, Event, Input, Key};
use window::{Api, OpenGLWindow, ProcAddress, Size, Window, WindowSettings};

use crate::settings::centered_position;

/// Owns the GLFW library handle, the window and its event queue.
pub struct GlfwWindow {
    window: PWindow,
    // Receives events from window.
    events: GlfwReceiver<(f64, WindowEvent)>,
    // Translated events not handed out yet.
    queue: VecDeque<Event>,
    glfw: Glfw,
}

impl GlfwWindow {
    /// Creates a new window with an OpenGL context current on this thread.
    ///
    /// The window is centered on the work area of the primary monitor.
    pub fn new(settings: &WindowSettings) -> Result<GlfwWindow> {
        let api = settings
            .get_maybe_graphics_api()
            .unwrap_or_else(|| Api::opengl(3, 3));
        if api.api != "OpenGL" {
            return Err(anyhow!(
                "unsupported graphics API {}: only OpenGL is available",
                api.api
            ));
        }
        let (major, minor) = (api.major, api.minor);

        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|err| anyhow!("{err:?}"))
            .context("could not initialize GLFW")?;

        glfw.window_hint(WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        glfw.window_hint(WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::DoubleBuffer(true));
        glfw.window_hint(WindowHint::Decorated(settings.get_decorated()));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));

        let (width, height): (u32, u32) = settings.get_size().into();
        let title = settings.get_title();
        let (mut window, events) = glfw
            .create_window(width, height, &title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                anyhow!("could not create {width}x{height} window with OpenGL {major}.{minor} core context")
            })?;

        let work_area = glfw.with_primary_monitor(|_, monitor| {
            monitor.map(|monitor| {
                let (_, _, work_width, work_height) = monitor.get_workarea();
                (work_width, work_height)
            })
        });
        match work_area {
            Some(work_area) => {
                let (x, y) = centered_position(work_area, (width, height));
                window.set_pos(x, y);
            }
            None => log::warn!("no primary monitor, leaving window at default position"),
        }

        window.make_current();
        let interval = if settings.get_vsync() { 1 } else { 0 };
        glfw.set_swap_interval(glfw::SwapInterval::Sync(interval));

        window.set_key_polling(true);
        window.set_close_polling(true);

        log::info!("created \"{title}\" {width}x{height} with OpenGL {major}.{minor} core context");

        Ok(GlfwWindow {
            window,
            events,
            queue: VecDeque::new(),
            glfw,
        })
    }

    fn flush_messages(&mut self) {
        for (_, event) in glfw::flush_messages(&self.events) {
            if let Some(input) = translate_event(event) {
                self.queue.push_back(Event::Input(input, None));
            }
        }
    }
}

impl Window for GlfwWindow {
    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn size(&self) -> Size {
        let (width, height) = self.window.get_size();
        Size {
            width: width as f64,
            height: height as f64,
        }
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn wait_event(&mut self) -> Event {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return event;
            }
            self.glfw.wait_events();
            self.flush_messages();
        }
    }

    fn wait_event_timeout(&mut self, timeout: Duration) -> Option<Event> {
        if self.queue.is_empty() {
            self.glfw.wait_events_timeout(timeout.as_secs_f64());
            self.flush_messages();
        }
        self.queue.pop_front()
    }

    fn poll_event(&mut self) -> Option<Event> {
        if self.queue.is_empty() {
            self.glfw.poll_events();
            self.flush_messages();
        }
        self.queue.pop_front()
    }

    fn draw_size(&self) -> Size {
        let (width, height) = self.window.get_framebuffer_size();
        Size {
            width: width as f64,
            height: height as f64,
        }
    }
}

impl OpenGLWindow for GlfwWindow {
    fn get_proc_address(&mut self, proc_name: &str) -> ProcAddress {
        self.window.get_proc_address(proc_name) as ProcAddress
    }

    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    fn make_current(&mut self) {
        self.window.make_current();
    }
}

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

/// Converts a GLFW event into piston input.
///
/// Key repeats and keys without a mapping are dropped.
fn translate_event(event: WindowEvent) -> Option<Input> {
    match event {
        WindowEvent::Key(key, scancode, action, _) => {
            let state = match action {
                glfw::Action::Press => ButtonState::Press,
                glfw::Action::Release => ButtonState::Release,
                glfw::Action::Repeat => return None,
            };
            let key = glfw_map_key(key)?;
            Some(Input::Button(ButtonArgs {
                state,
                button: Button::Keyboard(key),
                scancode: Some(scancode),
            }))
        }
        WindowEvent::Close => Some(Input::Close(CloseArgs)),
        _ => None,
    }
}

fn glfw_map_key(keycode: glfw::Key) -> Option<Key> {
    match keycode {
        glfw::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::{Action, Modifiers};

    fn key_event(key: glfw::Key, action: Action) -> WindowEvent {
        WindowEvent::Key(key, 9, action, Modifiers::empty())
    }

    #[test]
    fn escape_press_becomes_keyboard_press() {
        let input = translate_event(key_event(glfw::Key::Escape, Action::Press));
        assert_eq!(
            input,
            Some(Input::Button(ButtonArgs {
                state: ButtonState::Press,
                button: Button::Keyboard(Key::Escape),
                scancode: Some(9),
            }))
        );
    }

    #[test]
    fn escape_release_becomes_keyboard_release() {
        let input = translate_event(key_event(glfw::Key::Escape, Action::Release));
        match input {
            Some(Input::Button(args)) => {
                assert_eq!(args.state, ButtonState::Release);
                assert_eq!(args.button, Button::Keyboard(Key::Escape));
            }
            other => panic!("expected a button release, got {other:?}"),
        }
    }

    #[test]
    fn key_repeat_is_dropped() {
        assert_eq!(translate_event(key_event(glfw::Key::Escape, Action::Repeat)), None);
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(translate_event(key_event(glfw::Key::Space, Action::Press)), None);
        assert_eq!(translate_event(key_event(glfw::Key::Enter, Action::Release)), None);
    }

    #[test]
    fn close_becomes_close_input() {
        assert_eq!(
            translate_event(WindowEvent::Close),
            Some(Input::Close(CloseArgs))
        );
    }

    #[test]
    fn other_window_events_are_dropped() {
        assert_eq!(translate_event(WindowEvent::Focus(true)), None);
        assert_eq!(translate_event(WindowEvent::Size(640, 480)), None);
    }
}
