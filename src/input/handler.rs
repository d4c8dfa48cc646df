use crate::core::data::viewport_state::ViewportState;
use crate::input::commands::ViewerCommand;

/// Zoom moves by 10% of the current zoom per key event.
pub const ZOOM_STEP: f64 = 0.1;

/// Pan distance at zoom 1.0; scaled down as zoom increases so panning
/// covers the same on-screen distance at any magnification.
pub const MOVE_FACTOR: f64 = 0.05;

/// What the application loop should do after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Redraw,
    Quit,
}

/// Applies one command to the viewport state.
///
/// Deltas are recomputed from the current state on every call, never
/// cached, so consecutive zoom steps compound multiplicatively.
///
/// The iteration budget changes by a tenth of itself with the product
/// truncated through f32: repeated decreases stall once the budget
/// drops below 10, and a budget of 0 is frozen forever since a tenth
/// of it truncates to 0.
pub fn apply_command(state: &mut ViewportState, command: ViewerCommand) -> CommandOutcome {
    let zoom_delta = state.zoom * ZOOM_STEP;
    let move_delta = MOVE_FACTOR / state.zoom;

    match command {
        ViewerCommand::ZoomIn => state.zoom += zoom_delta,
        ViewerCommand::ZoomOut => state.zoom -= zoom_delta,
        ViewerCommand::PanLeft => state.center[0] -= move_delta,
        ViewerCommand::PanRight => state.center[0] += move_delta,
        ViewerCommand::PanUp => state.center[1] += move_delta,
        ViewerCommand::PanDown => state.center[1] -= move_delta,
        ViewerCommand::DecreaseIterations => {
            if state.max_iterations > 0 {
                state.max_iterations -= (state.max_iterations as f32 * 0.1) as i32;
            }
        }
        ViewerCommand::IncreaseIterations => {
            state.max_iterations += (state.max_iterations as f32 * 0.1) as i32;
        }
        ViewerCommand::ToggleMsaa => state.msaa = !state.msaa,
        ViewerCommand::Quit => return CommandOutcome::Quit,
    }

    CommandOutcome::Redraw
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn apply_all(state: &mut ViewportState, commands: &[ViewerCommand]) {
        for &command in commands {
            apply_command(state, command);
        }
    }

    #[test]
    fn zoom_compounds_multiplicatively() {
        // Zoom must track 1.0 * 1.1^in * 0.9^out for any key sequence.
        let sequences: [&[ViewerCommand]; 4] = [
            &[ViewerCommand::ZoomIn; 5],
            &[ViewerCommand::ZoomOut; 7],
            &[
                ViewerCommand::ZoomIn,
                ViewerCommand::ZoomOut,
                ViewerCommand::ZoomIn,
                ViewerCommand::ZoomIn,
                ViewerCommand::ZoomOut,
            ],
            &[
                ViewerCommand::ZoomOut,
                ViewerCommand::ZoomOut,
                ViewerCommand::ZoomIn,
            ],
        ];

        for commands in sequences {
            let mut state = ViewportState::default();
            apply_all(&mut state, commands);

            let zoom_ins = commands.iter().filter(|c| **c == ViewerCommand::ZoomIn).count();
            let zoom_outs = commands.iter().filter(|c| **c == ViewerCommand::ZoomOut).count();
            let expected = 1.1f64.powi(zoom_ins as i32) * 0.9f64.powi(zoom_outs as i32);

            assert!(
                (state.zoom - expected).abs() < EPSILON,
                "zoom {} diverged from expected {}",
                state.zoom,
                expected
            );
        }
    }

    #[test]
    fn zoom_in_then_out_twice_matches_sequential_deltas() {
        // From defaults: W gives 1.1, then S twice gives 1.1 - 0.11 - 0.099.
        let mut state = ViewportState::default();

        apply_command(&mut state, ViewerCommand::ZoomIn);
        assert!((state.zoom - 1.1).abs() < EPSILON);

        apply_command(&mut state, ViewerCommand::ZoomOut);
        apply_command(&mut state, ViewerCommand::ZoomOut);
        assert!((state.zoom - 0.891).abs() < EPSILON);
    }

    #[test]
    fn pan_delta_scales_inversely_with_zoom() {
        let mut at_default_zoom = ViewportState::default();
        apply_command(&mut at_default_zoom, ViewerCommand::PanRight);

        let mut at_double_zoom = ViewportState {
            zoom: 2.0,
            ..ViewportState::default()
        };
        apply_command(&mut at_double_zoom, ViewerCommand::PanRight);

        assert_eq!(at_default_zoom.center[0], MOVE_FACTOR);
        assert_eq!(at_double_zoom.center[0], MOVE_FACTOR / 2.0);
        assert_eq!(at_double_zoom.center[0] * 2.0, at_default_zoom.center[0]);
    }

    #[test]
    fn pan_directions_follow_screen_convention() {
        let mut state = ViewportState::default();

        apply_command(&mut state, ViewerCommand::PanRight);
        assert_eq!(state.center, [MOVE_FACTOR, 0.0]);

        apply_command(&mut state, ViewerCommand::PanLeft);
        assert_eq!(state.center, [0.0, 0.0]);

        apply_command(&mut state, ViewerCommand::PanUp);
        assert_eq!(state.center, [0.0, MOVE_FACTOR]);

        apply_command(&mut state, ViewerCommand::PanDown);
        assert_eq!(state.center, [0.0, 0.0]);
    }

    #[test]
    fn decreasing_iterations_follows_truncated_ten_percent_steps() {
        let mut state = ViewportState::default();
        let expected = [45, 41, 37, 34, 31, 28, 26, 24, 22, 20, 18];

        for &budget in &expected {
            apply_command(&mut state, ViewerCommand::DecreaseIterations);
            assert_eq!(state.max_iterations, budget);
        }
    }

    #[test]
    fn decreasing_iterations_stalls_below_ten() {
        let mut state = ViewportState::default();

        let mut previous = state.max_iterations;
        for _ in 0..100 {
            apply_command(&mut state, ViewerCommand::DecreaseIterations);
            assert!(state.max_iterations <= previous, "budget must never increase");
            previous = state.max_iterations;
        }

        // 10 - trunc(1.0) = 9, and trunc(0.9) = 0 pins it there.
        assert_eq!(state.max_iterations, 9);

        apply_command(&mut state, ViewerCommand::DecreaseIterations);
        assert_eq!(state.max_iterations, 9);
    }

    #[test]
    fn increasing_iterations_is_monotonic_non_decreasing() {
        let mut state = ViewportState::default();

        let mut previous = state.max_iterations;
        for _ in 0..50 {
            apply_command(&mut state, ViewerCommand::IncreaseIterations);
            assert!(state.max_iterations >= previous);
            previous = state.max_iterations;
        }
    }

    #[test]
    fn zero_iteration_budget_is_frozen_forever() {
        let mut state = ViewportState {
            max_iterations: 0,
            ..ViewportState::default()
        };

        for _ in 0..10 {
            apply_command(&mut state, ViewerCommand::IncreaseIterations);
            assert_eq!(state.max_iterations, 0);
        }

        apply_command(&mut state, ViewerCommand::DecreaseIterations);
        assert_eq!(state.max_iterations, 0);
    }

    #[test]
    fn even_msaa_toggles_restore_the_flag() {
        let mut state = ViewportState::default();

        for presses in 1..=6 {
            apply_command(&mut state, ViewerCommand::ToggleMsaa);
            assert_eq!(state.msaa, presses % 2 == 1);
        }
    }

    #[test]
    fn quit_requests_termination_without_mutating_state() {
        let mut state = ViewportState::default();

        let outcome = apply_command(&mut state, ViewerCommand::Quit);

        assert_eq!(outcome, CommandOutcome::Quit);
        assert_eq!(state, ViewportState::default());
    }

    #[test]
    fn every_other_command_requests_a_redraw() {
        let commands = [
            ViewerCommand::ZoomIn,
            ViewerCommand::ZoomOut,
            ViewerCommand::PanLeft,
            ViewerCommand::PanRight,
            ViewerCommand::PanUp,
            ViewerCommand::PanDown,
            ViewerCommand::DecreaseIterations,
            ViewerCommand::IncreaseIterations,
            ViewerCommand::ToggleMsaa,
        ];

        for command in commands {
            let mut state = ViewportState::default();
            assert_eq!(apply_command(&mut state, command), CommandOutcome::Redraw);
        }
    }
}
