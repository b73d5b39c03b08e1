//! Fixed configuration of the window and the color cycle.

use shader_version::OpenGL;
use window::WindowSettings;

/// Title of the window.
pub const TITLE: &str = "Simple Window";

/// Width of the window in screen coordinates.
pub const WIDTH: u32 = 1024;

/// Height of the window in screen coordinates.
pub const HEIGHT: u32 = 800;

/// OpenGL version requested for the context.
pub const OPENGL: OpenGL = OpenGL::V3_3;

/// Number of frames between two clear color changes.
pub const COLOR_CHANGE_INTERVAL: u64 = 60;

/// Returns the settings the window is created with.
pub fn window_settings() -> WindowSettings {
    WindowSettings::new(TITLE, (WIDTH, HEIGHT))
        .graphics_api(OPENGL)
        .vsync(true)
        .decorated(true)
}

/// Computes the top-left corner that centers a window on a monitor work area.
///
/// Only the work area dimensions are used, not its origin. A window larger
/// than the work area gets a negative offset.
pub fn centered_position(work_area: (i32, i32), window: (u32, u32)) -> (i32, i32) {
    let (work_width, work_height) = work_area;
    let (width, height) = (window.0 as i32, window.1 as i32);
    ((work_width - width) / 2, (work_height - height) / 2)
}
