//! Mode state machine driving the two strips
//!
//! The controller owns all persistent state and is the only consumer of
//! input events. Buttons switch the mode or the strip target and never
//! render; dial positions are dispatched to the handler of the current
//! mode, which renders through the [`StripDriver`] seam.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{
    DOT_STEP, DotSweep, FADE_STEP, FadeSweep, GRADIENT_STEP, GradientSweep, step_delay,
};
use crate::color::{Rgb, hsv_to_rgb_bytes};
use crate::event::{EventReceiver, InputEvent, RAW_POSITION_MAX, RAW_POSITION_MIN};
use crate::frame::{Frame, STRIP_LENGTH, solid};
use crate::mode::{BUTTON_COUNT, ButtonAction, Mode, StripTarget};
use crate::{StepPacer, StripDriver};

/// Normalized dial positions run from 0 to this value.
const POSITION_SPAN: f32 = 300.0;

/// The dial-to-hue scale runs hot: a full rotation lands at 1.2 instead of
/// 1.0 and relies on the conversion clamp for the last fifth of the travel.
const HUE_DIAL_GAIN: f32 = 1.2;

/// Full-scale velocity reading.
const VELOCITY_SCALE: f32 = 100.0;

/// Dial position the startup demo sweeps are run at.
const DEMO_POSITION: f32 = 100.0;

const INITIAL_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Persistent cross-event state.
///
/// Owned exclusively by the controller; handlers mutate it in place. The
/// last committed frame is kept because the dot and LED-count handlers
/// reuse its first entry instead of recomputing a color.
#[derive(Debug, Clone)]
pub struct ControllerState {
    pub mode: Mode,
    pub target: StripTarget,
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    /// Unset until the velocity mode is used; animations then fall back to
    /// their literal base cadence.
    pub velocity: Option<f32>,
    pub active_count: usize,
    pub frame: Frame,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            mode: Mode::Off,
            target: StripTarget::None,
            hue: 0.0,
            saturation: 1.0,
            value: 0.3,
            velocity: None,
            active_count: STRIP_LENGTH,
            frame: [INITIAL_COLOR; STRIP_LENGTH],
        }
    }
}

/// The mode state machine and render dispatcher.
pub struct ModeController<'a, D: StripDriver, P: StepPacer> {
    events: EventReceiver<'a>,
    driver: D,
    pacer: P,
    state: ControllerState,
}

impl<'a, D: StripDriver, P: StepPacer> ModeController<'a, D, P> {
    pub fn new(events: EventReceiver<'a>, driver: D, pacer: P) -> Self {
        Self {
            events,
            driver,
            pacer,
            state: ControllerState::default(),
        }
    }

    /// Current persistent state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Get a reference to the strip driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the strip driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Get a reference to the step pacer.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Drain and handle pending input events.
    ///
    /// Call this from the control loop. Events are handled strictly
    /// sequentially; a blocking animation finishes before the next event
    /// is looked at, and the depth-1 mailbox has coalesced anything that
    /// arrived in the meantime.
    pub fn poll(&mut self) {
        while let Some(event) = self.events.take() {
            self.handle_event(event);
        }
    }

    /// Handle a single input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ButtonStateChanged(mask) => self.on_buttons(mask),
            InputEvent::PositionChanged(raw) => self.on_position(raw),
        }
    }

    /// Apply a button mask, ascending index, lowest electrode first.
    ///
    /// Several bits may be set at once; target bits and mode bits land in
    /// different state fields, so within one kind the highest set index
    /// wins. Buttons only switch state, they never render.
    fn on_buttons(&mut self, mask: u16) {
        for index in 0..BUTTON_COUNT {
            if mask & (1u16 << index) == 0 {
                continue;
            }
            match ButtonAction::from_index(index) {
                Some(ButtonAction::SelectMode(mode)) => {
                    self.state.mode = mode;
                    #[cfg(feature = "esp32-log")]
                    println!("mode -> {}", mode.as_str());
                }
                Some(ButtonAction::SelectTarget(target)) => {
                    self.state.target = target;
                    #[cfg(feature = "esp32-log")]
                    println!("target -> {}", target.as_str());
                }
                None => {}
            }
        }
    }

    /// Dispatch a raw dial reading to the current mode handler.
    fn on_position(&mut self, raw: i16) {
        let position = normalize(raw);
        match self.state.mode {
            Mode::Hue => self.set_hue(position),
            Mode::Saturation => self.set_saturation(position),
            Mode::Value => self.set_value(position),
            Mode::Velocity => self.set_velocity(position),
            Mode::ColorGradient => self.run_gradient(),
            Mode::ColorDot => self.run_dot(),
            Mode::ColorFading => self.run_fading(position),
            Mode::ActiveLedCount => self.set_active_count(position),
            Mode::Off => {}
        }
    }

    fn set_hue(&mut self, position: f32) {
        let hue = position / POSITION_SPAN * HUE_DIAL_GAIN;
        let color = hsv_to_rgb_bytes(hue, self.state.saturation, self.state.value);
        self.commit_solid(color);
        self.state.hue = hue;
    }

    fn set_saturation(&mut self, position: f32) {
        let saturation = position / POSITION_SPAN;
        let color = hsv_to_rgb_bytes(self.state.hue, saturation, self.state.value);
        self.commit_solid(color);
        self.state.saturation = saturation;
    }

    fn set_value(&mut self, position: f32) {
        let value = position / POSITION_SPAN;
        let color = hsv_to_rgb_bytes(self.state.hue, self.state.saturation, value);
        self.commit_solid(color);
        self.state.value = value;
    }

    /// Persist the dial reading as animation velocity; no render.
    fn set_velocity(&mut self, position: f32) {
        self.state.velocity = Some(position / POSITION_SPAN * VELOCITY_SCALE);
    }

    /// One full rainbow rotation across the strip. Does not touch the
    /// committed frame.
    fn run_gradient(&mut self) {
        let delay = step_delay(GRADIENT_STEP, self.state.velocity);
        let sweep = GradientSweep::new(self.state.saturation, self.state.value);
        for frame in sweep {
            self.render(&frame);
            self.pacer.pause(delay);
        }
    }

    /// One out-and-back pass of a single dot in the committed color.
    fn run_dot(&mut self) {
        let delay = step_delay(DOT_STEP, self.state.velocity);
        let sweep = DotSweep::new(self.state.frame[0]);
        for frame in sweep {
            self.render(&frame);
            self.pacer.pause(delay);
        }
    }

    /// Fade the committed color up to full value and back down.
    ///
    /// A dial pinned at full scale is a no-op, reproducing the reference
    /// boundary guard. Each step commits its frame; the stored value
    /// component itself is left untouched.
    fn run_fading(&mut self, position: f32) {
        if position >= POSITION_SPAN {
            return;
        }
        let delay = step_delay(FADE_STEP, self.state.velocity);
        let sweep = FadeSweep::new(self.state.hue, self.state.saturation, self.state.active_count);
        for frame in sweep {
            self.render(&frame);
            self.state.frame = frame;
            self.pacer.pause(delay);
        }
    }

    /// Light a dial-selected prefix of the strip in the committed color.
    ///
    /// Only the count persists; the committed frame keeps its previous
    /// content.
    fn set_active_count(&mut self, position: f32) {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = libm::ceilf(position / POSITION_SPAN * STRIP_LENGTH as f32) as usize;
        let count = count.clamp(1, STRIP_LENGTH);
        let frame = solid(self.state.frame[0], count);
        self.render(&frame);
        self.state.active_count = count;
    }

    /// Build, render and persist a solid frame over the active LEDs.
    fn commit_solid(&mut self, color: Rgb) {
        let frame = solid(color, self.state.active_count);
        self.render(&frame);
        self.state.frame = frame;
    }

    /// Push a frame to every strip covered by the current target.
    ///
    /// Target `None` drops the frame; the strips keep showing whatever was
    /// written last.
    fn render(&mut self, frame: &Frame) {
        for &strip in self.state.target.strips() {
            self.driver.set_frame(strip, frame);
        }
    }

    /// Switch off every strip covered by the current target.
    pub fn all_off(&mut self) {
        for &strip in self.state.target.strips() {
            self.driver.all_off(strip);
        }
    }

    /// Fixed attract sequence run once at startup, before live input.
    ///
    /// Forces both strips, runs two dot sweeps and two fade sweeps, then
    /// goes dark.
    pub fn startup_demo(&mut self) {
        self.state.target = StripTarget::Both;
        self.run_dot();
        self.run_dot();
        self.run_fading(DEMO_POSITION);
        self.run_fading(DEMO_POSITION);
        self.all_off();
    }

    /// Final render before the driver connection is released: both strips
    /// dark, whatever the previous target was.
    pub fn shutdown(&mut self) {
        self.state.target = StripTarget::Both;
        self.all_off();
    }
}

/// Clamp a raw sensor reading and shift it into `[0, 300]`.
fn normalize(raw: i16) -> f32 {
    f32::from(raw.clamp(RAW_POSITION_MIN, RAW_POSITION_MAX) - RAW_POSITION_MIN)
}
