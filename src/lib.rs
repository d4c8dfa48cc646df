mod app;
mod core;
mod input;
mod render;

pub use app::{ViewerError, run};
