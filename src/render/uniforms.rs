//! Uniform block uploaded once per frame.

use bytemuck::{Pod, Zeroable};

use crate::core::data::viewport_state::ViewportState;
use crate::core::data::window_dimensions::WindowDimensions;

/// Per-frame shader inputs. Field names are the shader-facing contract.
///
/// `resolution` receives (height, width) in that order — a fixed
/// convention the fragment shader relies on. The f64 view parameters are
/// downcast to f32 at upload since WGSL uniforms have no double type.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub resolution: [f32; 2],
    pub center: [f32; 2],
    pub julia_point: [f32; 2],
    pub zoom: f32,
    pub maxiter: f32,
    pub msaa: u32,
    pub trap_bitmap: u32,
    pub _pad: [u32; 2],
}

impl FrameUniforms {
    #[must_use]
    pub fn new(state: &ViewportState, dimensions: WindowDimensions) -> Self {
        Self {
            resolution: [dimensions.height as f32, dimensions.width as f32],
            center: [state.center[0] as f32, state.center[1] as f32],
            julia_point: [state.julia_point[0] as f32, state.julia_point[1] as f32],
            zoom: state.zoom as f32,
            maxiter: state.max_iterations as f32,
            msaa: u32::from(state.msaa),
            trap_bitmap: u32::from(state.overlay),
            _pad: [0, 0],
        }
    }
}
