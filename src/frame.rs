//! Fixed-size frame buffer for one strip
//!
//! A frame is the full per-LED state pushed to a strip in one render call.
//! Frames are always rebuilt or rotated wholesale; there is no partial
//! update path.

use crate::color::Rgb;

/// Number of addressable LEDs on each physical strip.
pub const STRIP_LENGTH: usize = 16;

/// One full RGB frame for a strip, index 0 at the strip start.
pub type Frame = [Rgb; STRIP_LENGTH];

/// An unlit LED.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// A frame with every LED off.
pub const OFF_FRAME: Frame = [BLACK; STRIP_LENGTH];

/// Build a frame with the first `active_count` LEDs lit in `color` and the
/// rest dark.
///
/// Counts above `STRIP_LENGTH` are clamped; a count of 0 is a dark frame.
pub fn solid(color: Rgb, active_count: usize) -> Frame {
    let mut frame = OFF_FRAME;
    let lit = active_count.min(STRIP_LENGTH);
    for led in &mut frame[..lit] {
        *led = color;
    }
    frame
}
