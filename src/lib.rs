#![deny(missing_docs)]

//! A GLFW window that clears to a random color every 60 frames.

pub use clear::{ClearColor, ClearFunctions, ClearTarget};
pub use glfw_window::GlfwWindow;
pub use logger::Logger;
pub use render_loop::RenderLoop;

pub mod clear;
pub mod logger;
pub mod render_loop;
pub mod settings;

mod glfw_window;
