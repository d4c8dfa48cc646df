//! Main application loop.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use crate::core::data::viewport_state::ViewportState;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::input::commands::command_for_key;
use crate::input::handler::{CommandOutcome, apply_command};
use crate::render::Renderer;
use crate::render::context::GpuContext;
use crate::render::error::GpuError;
use crate::render::overlay::decode_overlay_image;
use crate::render::quad_renderer::QuadRenderer;

/// Startup failures. All of these are fatal; the process exits nonzero.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),
}

/// Runs the viewer until the window is closed or Escape is pressed.
///
/// The loop is event-driven: it blocks until input or window events
/// arrive and renders one frame per state change, never on a timer.
/// A failed overlay decode is logged and the run continues without an
/// overlay; the overlay flag is only set once decoding succeeded, so
/// the shader is never told a texture exists when none was bound.
pub fn run(overlay_path: Option<PathBuf>) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;

    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Set Viewer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .build(&event_loop)?,
    );

    let context = GpuContext::new(Arc::clone(&window))?;

    let overlay = overlay_path
        .as_deref()
        .and_then(|path| match decode_overlay_image(path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::error!("{e}");
                None
            }
        });

    let mut state = ViewportState {
        overlay: overlay.is_some(),
        ..ViewportState::default()
    };

    let mut renderer = QuadRenderer::new(context, overlay.as_ref());

    let size = window.inner_size();
    let mut dimensions = WindowDimensions::new(size.width, size.height);
    let mut redraw_pending = true;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if let PhysicalKey::Code(code) = key_event.physical_key {
                        if let Some(command) =
                            command_for_key(code, key_event.state, key_event.repeat)
                        {
                            match apply_command(&mut state, command) {
                                CommandOutcome::Quit => elwt.exit(),
                                CommandOutcome::Redraw => redraw_pending = true,
                            }
                        }
                    }
                }
                WindowEvent::Resized(size) => {
                    dimensions = WindowDimensions::new(size.width, size.height);
                    renderer.resize(dimensions);
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    dimensions = WindowDimensions::new(size.width, size.height);
                    renderer.resize(dimensions);
                    redraw_pending = true;
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    // Skip rendering while minimized.
                    if dimensions.width == 0 || dimensions.height == 0 {
                        return;
                    }

                    renderer.upload_frame_state(&state, dimensions);
                    match renderer.draw_frame() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(dimensions);
                            redraw_pending = true;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("render surface out of memory");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("frame skipped: {e}"),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
