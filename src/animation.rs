//! Animation step sequences
//!
//! Every animation is an iterator over complete frames. The sweeps carry no
//! timing themselves; the controller pairs each sequence with a step delay
//! and hands the waiting to its [`crate::StepPacer`], so tests can walk a
//! whole sweep without real time passing.

use embassy_time::Duration;

use crate::color::{Rgb, hsv_to_rgb_bytes};
use crate::frame::{BLACK, Frame, OFF_FRAME, STRIP_LENGTH, solid};

/// Base cadence of one gradient rotation step.
pub const GRADIENT_STEP: Duration = Duration::from_millis(75);

/// Base cadence of one dot movement step.
pub const DOT_STEP: Duration = Duration::from_millis(100);

/// Base cadence of one fade step.
pub const FADE_STEP: Duration = Duration::from_millis(75);

/// Neutral point of the velocity scale: at 50 the base cadence is kept.
const VELOCITY_NEUTRAL: f32 = 50.0;

/// Upper end of the velocity scale.
const VELOCITY_MAX: f32 = 100.0;

/// Derive the per-step delay of an animation from the persisted velocity.
///
/// This is the single canonical velocity contract: with no velocity set the
/// literal base cadence applies; a velocity `v` in `[0, 100]` scales the
/// delay by `100 / (50 + v)`, so 0 halves the speed and 100 runs at 1.5x.
pub fn step_delay(base: Duration, velocity: Option<f32>) -> Duration {
    let Some(velocity) = velocity else {
        return base;
    };
    let velocity = velocity.clamp(0.0, VELOCITY_MAX);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = (base.as_millis() as f32 * VELOCITY_MAX / (VELOCITY_NEUTRAL + velocity)) as u64;
    Duration::from_millis(millis)
}

/// Rotating rainbow sweep.
///
/// Starts from a full-strip rainbow (LED `i` at hue `i / 16`) and yields 16
/// left rotations of it; after the last step the buffer has come full
/// circle back to the initial rainbow.
pub struct GradientSweep {
    frame: Frame,
    remaining: usize,
}

impl GradientSweep {
    pub fn new(saturation: f32, value: f32) -> Self {
        let mut frame = OFF_FRAME;
        for (i, led) in frame.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let hue = i as f32 / STRIP_LENGTH as f32;
            *led = hsv_to_rgb_bytes(hue, saturation, value);
        }
        Self {
            frame,
            remaining: STRIP_LENGTH,
        }
    }
}

impl Iterator for GradientSweep {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.frame.rotate_left(1);
        Some(self.frame)
    }
}

/// Single-dot sweep: one lit LED walks from the strip start to the far end
/// and back, 15 steps each way.
pub struct DotSweep {
    frame: Frame,
    index: usize,
    forward: bool,
    done: bool,
}

impl DotSweep {
    /// The dot takes its color from `color`; every other LED stays dark.
    pub fn new(color: Rgb) -> Self {
        let mut frame = OFF_FRAME;
        frame[0] = color;
        Self {
            frame,
            index: 0,
            forward: true,
            done: false,
        }
    }

    fn shift_dot(&mut self, to: usize) {
        self.frame[to] = self.frame[self.index];
        self.frame[self.index] = BLACK;
        self.index = to;
    }
}

impl Iterator for DotSweep {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        if self.forward {
            self.shift_dot(self.index + 1);
            if self.index == STRIP_LENGTH - 1 {
                self.forward = false;
            }
        } else {
            self.shift_dot(self.index - 1);
            if self.index == 0 {
                self.done = true;
            }
        }
        Some(self.frame)
    }
}

/// Number of steps in each direction of a fade sweep.
const FADE_STEPS: usize = 20;

/// Brightness fade: solid frames sweeping value 0.05 to 1.0 and back down,
/// 20 equal steps each way, at a fixed hue and saturation.
pub struct FadeSweep {
    hue: f32,
    saturation: f32,
    active_count: usize,
    step: usize,
}

impl FadeSweep {
    pub fn new(hue: f32, saturation: f32, active_count: usize) -> Self {
        Self {
            hue,
            saturation,
            active_count,
            step: 0,
        }
    }
}

impl Iterator for FadeSweep {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.step >= 2 * FADE_STEPS {
            return None;
        }
        // Rising half counts 1..=20, falling half 20..=1.
        let k = if self.step < FADE_STEPS {
            self.step + 1
        } else {
            2 * FADE_STEPS - self.step
        };
        self.step += 1;

        #[allow(clippy::cast_precision_loss)]
        let value = k as f32 / FADE_STEPS as f32;
        let color = hsv_to_rgb_bytes(self.hue, self.saturation, value);
        Some(solid(color, self.active_count))
    }
}
