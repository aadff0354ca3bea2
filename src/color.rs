//! HSV to RGB conversion for strip frames
//!
//! Works on normalized float components and truncates to bytes, matching
//! the byte values the strips were originally calibrated against.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Convert an HSV color with components in `[0, 1]` to RGB bytes.
///
/// Out-of-range components are clamped before conversion; a hue of exactly
/// 1.0 wraps onto the red sector. Bytes are truncated (`floor`), not
/// rounded, so e.g. value 0.3 at full red yields 76, not 77.
pub fn hsv_to_rgb_bytes(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = clamp01(hue);
    let saturation = clamp01(saturation);
    let value = clamp01(value);

    if saturation <= 0.0 {
        let grey = to_byte(value);
        return Rgb {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let scaled = hue * 6.0;
    #[allow(clippy::cast_possible_truncation)]
    let sector = libm::floorf(scaled) as i32;
    let fraction = scaled - libm::floorf(scaled);

    let low = value * (1.0 - saturation);
    let falling = value * (1.0 - saturation * fraction);
    let rising = value * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector.rem_euclid(6) {
        0 => (value, rising, low),
        1 => (falling, value, low),
        2 => (low, value, rising),
        3 => (low, falling, value),
        4 => (rising, low, value),
        _ => (value, low, falling),
    };

    Rgb {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

/// Clamp a component into `[0, 1]`.
///
/// Inputs outside the range are a caller bug, but sensor noise must never
/// turn into a panic, so the conversion absorbs them.
pub fn clamp01(component: f32) -> f32 {
    component.clamp(0.0, 1.0)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(component: f32) -> u8 {
    (clamp01(component) * 255.0) as u8
}
