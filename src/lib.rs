#![no_std]

pub mod animation;
pub mod color;
pub mod controller;
pub mod event;
pub mod frame;
pub mod mailbox;
pub mod mode;

pub use animation::{
    DOT_STEP, DotSweep, FADE_STEP, FadeSweep, GRADIENT_STEP, GradientSweep, step_delay,
};
pub use controller::{ControllerState, ModeController};
pub use event::{EventMailbox, EventReceiver, EventSender, InputEvent};
pub use frame::{BLACK, Frame, STRIP_LENGTH, solid};
pub use mailbox::{Mailbox, MailboxFull, Receiver, Sender};
pub use mode::{ButtonAction, Mode, StripId, StripTarget};

pub use color::{Rgb, hsv_to_rgb_bytes};
pub use embassy_time::Duration;

/// Abstract LED strip driver trait
///
/// Implement this trait to deliver frames to the physical strips.
/// The controller is generic over this trait and never observes transport
/// failures; a disconnected strip must surface as a dropped write, not an
/// error. Consecutive writes to the same strip are issued strictly in order.
pub trait StripDriver {
    /// Write a full frame to one strip
    fn set_frame(&mut self, strip: StripId, frame: &Frame);

    /// Turn every LED of one strip off
    fn all_off(&mut self, strip: StripId);
}

/// Pacing seam for animation steps
///
/// Animations are plain step sequences; the pacer owns the waiting between
/// steps. A production implementation blocks for `delay`, a test
/// implementation records it and returns immediately.
pub trait StepPacer {
    /// Wait out the gap before the next animation step
    fn pause(&mut self, delay: Duration);
}
