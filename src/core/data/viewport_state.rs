/// Interactive view parameters for the fractal plane.
///
/// Single instance owned by the application loop, mutated only by the
/// input handler and read only by the frame renderer, so no locking is
/// needed. `zoom` stays strictly positive in practice (it starts at 1.0
/// and moves by multiplicative 10% steps) but is deliberately unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub center: [f64; 2],
    /// Julia seed; (0, 0) selects the Mandelbrot set in the shader.
    pub julia_point: [f64; 2],
    /// Iteration budget. Conceptually non-negative, not enforced.
    pub max_iterations: i32,
    pub msaa: bool,
    /// True only when an overlay texture was supplied and decoded.
    pub overlay: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center: [0.0, 0.0],
            julia_point: [0.0, 0.0],
            max_iterations: 50,
            msaa: false,
            overlay: false,
        }
    }
}
