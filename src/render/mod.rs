pub mod context;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod quad_renderer;
pub mod uniforms;

use crate::core::data::viewport_state::ViewportState;
use crate::core::data::window_dimensions::WindowDimensions;

/// Per-frame rendering seam between the application loop and the GPU
/// backend: push the current view parameters, then paint one frame.
pub trait Renderer {
    fn upload_frame_state(&mut self, state: &ViewportState, dimensions: WindowDimensions);

    fn draw_frame(&mut self) -> Result<(), wgpu::SurfaceError>;

    fn resize(&mut self, dimensions: WindowDimensions);
}
