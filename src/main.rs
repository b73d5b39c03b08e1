use anyhow::Result;
use glfw_clear_window::{settings, ClearFunctions, GlfwWindow, Logger, RenderLoop};
use window::OpenGLWindow;

fn main() -> Result<()> {
    Logger::init(log::LevelFilter::Info)?;

    let mut window = GlfwWindow::new(&settings::window_settings())?;
    let clear = ClearFunctions::load(|name| window.get_proc_address(name))?;

    let mut render_loop = RenderLoop::new(window, clear, rand::thread_rng());
    render_loop.run();
    Ok(())
}
