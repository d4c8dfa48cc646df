pub mod viewport_state;
pub mod window_dimensions;
