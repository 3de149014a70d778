use druid::Data;

use crate::lorenz::{LorenzParams, MAX_POINTS};

/// Default attractor parameters.
pub const DEFAULT_S: f64 = 10.0;
pub const DEFAULT_B: f64 = 2.6666;
pub const DEFAULT_R: f64 = 28.0;

/// Default color cycle frequency.
pub const DEFAULT_COLOR_FREQUENCY: f64 = 0.0100;

/// Viewing-angle increment per rotation command, in degrees.
const ANGLE_STEP: i32 = 5;

/// Step sizes for the parameter commands.
const B_STEP: f64 = 1.0 / 3.0;
const COLOR_FREQUENCY_STEP: f64 = 0.0001;

/// Elapsed milliseconds are divided by this to get the animation cursor,
/// so the animation advances slightly slower than one point per millisecond.
const ANIMATION_CLOCK_DIVISOR: f64 = 1.06;

/// Which of the two program modes is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Data)]
pub enum Mode {
    /// The full trajectory is shown at once.
    Explorer,
    /// The trajectory is traced point by point against the wall clock.
    Animation,
}

/// Discrete state-mutating commands, one per key binding. Every command is
/// valid in either mode and never fails.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    EnterExplorer,
    EnterAnimation,
    IncreaseS,
    DecreaseS,
    IncreaseB,
    DecreaseB,
    IncreaseR,
    DecreaseR,
    IncreaseColorFrequency,
    DecreaseColorFrequency,
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
    ResetView,
    ResetColor,
    ResetParameters,
}

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// Lorenz parameter s (sigma)
    pub s: f64,
    /// Lorenz parameter b (beta)
    pub b: f64,
    /// Lorenz parameter r (rho)
    pub r: f64,
    /// How fast the palette cycles along the trajectory
    pub color_frequency: f64,
    /// Rotation about the Y axis, in degrees
    pub yaw: i32,
    /// Rotation about the X axis, in degrees
    pub pitch: i32,
    /// Explorer or Animation
    pub mode: Mode,
    /// How many points of the animation are currently visible
    pub animation_cursor: usize,
}

impl AppState {
    pub fn new(mode: Mode) -> Self {
        AppState {
            s: DEFAULT_S,
            b: DEFAULT_B,
            r: DEFAULT_R,
            color_frequency: DEFAULT_COLOR_FREQUENCY,
            yaw: 0,
            pitch: 0,
            mode,
            animation_cursor: 0,
        }
    }

    /// The attractor parameters as the integrator wants them.
    pub fn params(&self) -> LorenzParams {
        LorenzParams {
            s: self.s,
            b: self.b,
            r: self.r,
        }
    }

    /// Applies one discrete command. Angles wrap via signed remainder, so
    /// they stay in (-360, 360) rather than being normalized to [0, 360).
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::EnterExplorer => {
                self.mode = Mode::Explorer;
                self.animation_cursor = 0;
            }
            Command::EnterAnimation => {
                // The animation always restarts from the first point; the
                // widget captures the start instant when it issues this.
                self.mode = Mode::Animation;
                self.animation_cursor = 0;
            }
            Command::IncreaseS => self.s += 1.0,
            Command::DecreaseS => self.s -= 1.0,
            Command::IncreaseB => self.b += B_STEP,
            Command::DecreaseB => self.b -= B_STEP,
            Command::IncreaseR => self.r += 1.0,
            Command::DecreaseR => self.r -= 1.0,
            Command::IncreaseColorFrequency => self.color_frequency += COLOR_FREQUENCY_STEP,
            Command::DecreaseColorFrequency => self.color_frequency -= COLOR_FREQUENCY_STEP,
            Command::RotateRight => self.yaw = (self.yaw + ANGLE_STEP) % 360,
            Command::RotateLeft => self.yaw = (self.yaw - ANGLE_STEP) % 360,
            Command::RotateUp => self.pitch = (self.pitch + ANGLE_STEP) % 360,
            Command::RotateDown => self.pitch = (self.pitch - ANGLE_STEP) % 360,
            Command::ResetView => {
                self.yaw = 0;
                self.pitch = 0;
            }
            Command::ResetColor => self.color_frequency = DEFAULT_COLOR_FREQUENCY,
            Command::ResetParameters => {
                self.s = DEFAULT_S;
                self.b = DEFAULT_B;
                self.r = DEFAULT_R;
            }
        }
    }

    /// Advances the animation cursor from wall-clock time. `elapsed_ms` is
    /// the time since Animation mode was last entered. The cursor is derived
    /// from elapsed time rather than accumulated per frame, so a slow frame
    /// makes the animation catch up instead of lag. It never moves backward
    /// and saturates at the full trajectory length.
    pub fn tick(&mut self, elapsed_ms: f64) {
        if self.mode != Mode::Animation {
            return;
        }
        let target = ((elapsed_ms / ANIMATION_CLOCK_DIVISOR) as usize).min(MAX_POINTS);
        if target > self.animation_cursor {
            self.animation_cursor = target;
        }
    }

    /// True once the animation has reached the end of the trajectory.
    pub fn animation_complete(&self) -> bool {
        self.mode == Mode::Animation && self.animation_cursor == MAX_POINTS
    }

    /// How many trajectory points the current frame should draw.
    pub fn points_to_render(&self) -> usize {
        match self.mode {
            Mode::Explorer => MAX_POINTS,
            Mode::Animation => self.animation_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_of_rotate_right_returns_yaw_to_start() {
        let mut state = AppState::new(Mode::Explorer);
        state.yaw = 15;
        for _ in 0..72 {
            state.apply(Command::RotateRight);
        }
        assert_eq!(state.yaw, 15);
    }

    #[test]
    fn rotate_right_then_left_is_identity() {
        let mut state = AppState::new(Mode::Explorer);
        state.apply(Command::RotateRight);
        state.apply(Command::RotateLeft);
        assert_eq!(state.yaw, 0);
    }

    #[test]
    fn angles_wrap_with_sign_preserved() {
        let mut state = AppState::new(Mode::Explorer);
        for _ in 0..73 {
            state.apply(Command::RotateLeft);
        }
        // 73 * -5 = -365, which wraps to -5 under signed remainder.
        assert_eq!(state.yaw, -5);
        for _ in 0..73 {
            state.apply(Command::RotateUp);
        }
        assert_eq!(state.pitch, 5);
    }

    #[test]
    fn entering_animation_resets_the_cursor() {
        let mut state = AppState::new(Mode::Explorer);
        state.apply(Command::EnterAnimation);
        state.tick(10_000.0);
        assert!(state.animation_cursor > 0);
        state.apply(Command::EnterAnimation);
        assert_eq!(state.animation_cursor, 0);
    }

    #[test]
    fn switching_to_explorer_resets_the_cursor() {
        let mut state = AppState::new(Mode::Animation);
        state.tick(5_000.0);
        state.apply(Command::EnterExplorer);
        assert_eq!(state.animation_cursor, 0);
        assert_eq!(state.points_to_render(), MAX_POINTS);
    }

    #[test]
    fn tick_never_moves_the_cursor_backward() {
        let mut state = AppState::new(Mode::Animation);
        state.tick(10_000.0);
        let cursor = state.animation_cursor;
        state.tick(1_000.0);
        assert_eq!(state.animation_cursor, cursor);
    }

    #[test]
    fn cursor_saturates_at_the_trajectory_length() {
        let mut state = AppState::new(Mode::Animation);
        state.tick(1.0e12);
        assert_eq!(state.animation_cursor, MAX_POINTS);
        assert!(state.animation_complete());
        state.tick(2.0e12);
        assert_eq!(state.animation_cursor, MAX_POINTS);
    }

    #[test]
    fn tick_is_ignored_in_explorer_mode() {
        let mut state = AppState::new(Mode::Explorer);
        state.tick(10_000.0);
        assert_eq!(state.animation_cursor, 0);
    }

    #[test]
    fn animation_clock_rescales_milliseconds() {
        let mut state = AppState::new(Mode::Animation);
        state.tick(1_060.0);
        assert_eq!(state.animation_cursor, 1_000);
    }

    #[test]
    fn reset_parameters_restores_exact_defaults() {
        let mut state = AppState::new(Mode::Explorer);
        for _ in 0..7 {
            state.apply(Command::IncreaseS);
            state.apply(Command::DecreaseB);
            state.apply(Command::IncreaseR);
        }
        state.apply(Command::ResetParameters);
        assert_eq!(state.s, DEFAULT_S);
        assert_eq!(state.b, DEFAULT_B);
        assert_eq!(state.r, DEFAULT_R);
    }

    #[test]
    fn reset_color_restores_the_default_frequency() {
        let mut state = AppState::new(Mode::Explorer);
        state.apply(Command::IncreaseColorFrequency);
        state.apply(Command::ResetColor);
        assert_eq!(state.color_frequency, DEFAULT_COLOR_FREQUENCY);
    }

    #[test]
    fn parameter_steps_match_the_key_bindings() {
        let mut state = AppState::new(Mode::Explorer);
        state.apply(Command::IncreaseB);
        assert!((state.b - (DEFAULT_B + 1.0 / 3.0)).abs() < 1e-12);
        state.apply(Command::DecreaseColorFrequency);
        assert!((state.color_frequency - 0.0099).abs() < 1e-12);
    }

    #[test]
    fn points_to_render_follows_the_cursor_in_animation() {
        let mut state = AppState::new(Mode::Animation);
        assert_eq!(state.points_to_render(), 0);
        state.tick(1_060.0);
        assert_eq!(state.points_to_render(), 1_000);
    }
}
