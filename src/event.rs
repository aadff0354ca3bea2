//! Input events delivered by the touch panel and rotary dial

use crate::mailbox::{Mailbox, Receiver, Sender};

/// Raw dial position range reported by the sensor.
pub const RAW_POSITION_MIN: i16 = -150;
pub const RAW_POSITION_MAX: i16 = 150;

/// One event from the input hardware.
///
/// Positions arrive raw in `[-150, 150]`; button state is a bitmask with
/// the low [`crate::mode::BUTTON_COUNT`] bits meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PositionChanged(i16),
    ButtonStateChanged(u16),
}

/// Depth-1 input mailbox: a newer event replaces an unconsumed one.
///
/// Animations block the control loop for up to a few seconds, and a stale
/// dial reading is not worth replaying afterwards.
pub type EventMailbox = Mailbox<InputEvent, 1>;

pub type EventSender<'a> = Sender<'a, InputEvent, 1>;

pub type EventReceiver<'a> = Receiver<'a, InputEvent, 1>;
