//! Clear color state and the dynamically resolved clear entry points.

use std::mem;

use anyhow::{anyhow, Result};
use gl::types::{GLbitfield, GLfloat};
use rand::Rng;
use window::ProcAddress;

/// Name of the entry point that sets the clear color.
pub const CLEAR_COLOR_SYMBOL: &str = "glClearColor";

/// Name of the entry point that clears buffers.
pub const CLEAR_SYMBOL: &str = "glClear";

/// An RGBA clear color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearColor {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl ClearColor {
    /// Creates an opaque color.
    pub fn opaque(r: f32, g: f32, b: f32) -> ClearColor {
        ClearColor { r, g, b, a: 1.0 }
    }

    /// Draws each of red, green and blue uniformly from `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R) -> ClearColor {
        let r = rng.gen::<f32>();
        let g = rng.gen::<f32>();
        let b = rng.gen::<f32>();
        ClearColor::opaque(r, g, b)
    }
}

/// Something that holds a clear color and can clear the color buffer.
pub trait ClearTarget {
    /// Sets the color used by subsequent clears.
    fn set_clear_color(&mut self, color: ClearColor);

    /// Clears the color buffer.
    fn clear(&mut self);
}

type ClearColorFn = unsafe extern "system" fn(GLfloat, GLfloat, GLfloat, GLfloat);
type ClearFn = unsafe extern "system" fn(GLbitfield);

/// `glClearColor` and `glClear`, looked up once from the current context.
pub struct ClearFunctions {
    clear_color: ClearColorFn,
    clear: ClearFn,
}

impl ClearFunctions {
    /// Resolves both entry points through `loader`.
    ///
    /// Fails with the symbol name if the loader returns null for either.
    /// The loader must hand out addresses with the OpenGL signatures of
    /// the requested names, as `OpenGLWindow::get_proc_address` does.
    pub fn load<F>(mut loader: F) -> Result<ClearFunctions>
    where
        F: FnMut(&str) -> ProcAddress,
    {
        let clear_color = resolve(&mut loader, CLEAR_COLOR_SYMBOL)?;
        let clear = resolve(&mut loader, CLEAR_SYMBOL)?;
        // SAFETY: both pointers are non-null and come from the GL loader for
        // these exact symbols, so they have the declared signatures.
        let functions = unsafe {
            ClearFunctions {
                clear_color: mem::transmute::<ProcAddress, ClearColorFn>(clear_color),
                clear: mem::transmute::<ProcAddress, ClearFn>(clear),
            }
        };
        Ok(functions)
    }
}

fn resolve<F>(loader: &mut F, symbol: &str) -> Result<ProcAddress>
where
    F: FnMut(&str) -> ProcAddress,
{
    let address = loader(symbol);
    if address.is_null() {
        return Err(anyhow!("could not resolve OpenGL function {symbol}"));
    }
    log::debug!("resolved {symbol} at {address:p}");
    Ok(address)
}

impl ClearTarget for ClearFunctions {
    fn set_clear_color(&mut self, color: ClearColor) {
        unsafe { (self.clear_color)(color.r, color.g, color.b, color.a) };
    }

    fn clear(&mut self) {
        unsafe { (self.clear)(gl::COLOR_BUFFER_BIT) };
    }
}
