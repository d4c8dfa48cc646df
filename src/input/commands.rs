use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Discrete viewport mutations produced by key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    DecreaseIterations,
    IncreaseIterations,
    ToggleMsaa,
    Quit,
}

/// Maps a key event to a command.
///
/// Held keys deliver repeat events and keep acting, except for the
/// antialias toggle and quit, which respond to the initial press only.
/// Releases and unbound keys map to nothing.
#[must_use]
pub fn command_for_key(key: KeyCode, state: ElementState, repeat: bool) -> Option<ViewerCommand> {
    if state != ElementState::Pressed {
        return None;
    }

    match key {
        KeyCode::KeyW => Some(ViewerCommand::ZoomIn),
        KeyCode::KeyS => Some(ViewerCommand::ZoomOut),
        KeyCode::ArrowLeft => Some(ViewerCommand::PanLeft),
        KeyCode::ArrowRight => Some(ViewerCommand::PanRight),
        KeyCode::ArrowUp => Some(ViewerCommand::PanUp),
        KeyCode::ArrowDown => Some(ViewerCommand::PanDown),
        KeyCode::KeyQ => Some(ViewerCommand::DecreaseIterations),
        KeyCode::KeyE => Some(ViewerCommand::IncreaseIterations),
        KeyCode::KeyM if !repeat => Some(ViewerCommand::ToggleMsaa),
        KeyCode::Escape if !repeat => Some(ViewerCommand::Quit),
        _ => None,
    }
}
