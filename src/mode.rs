//! Modes, strip targeting and the touch panel button table

const MODE_NAME_HUE: &str = "hue";
const MODE_NAME_SATURATION: &str = "saturation";
const MODE_NAME_VALUE: &str = "value";
const MODE_NAME_VELOCITY: &str = "velocity";
const MODE_NAME_COLOR_GRADIENT: &str = "color_gradient";
const MODE_NAME_COLOR_DOT: &str = "color_dot";
const MODE_NAME_COLOR_FADING: &str = "color_fading";
const MODE_NAME_ACTIVE_LED_COUNT: &str = "active_led_count";
const MODE_NAME_OFF: &str = "off";

/// Number of meaningful bits in a touch panel button mask.
pub const BUTTON_COUNT: u8 = 12;

/// Interpretation applied to incoming dial position events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Dial picks the hue of a solid color
    Hue,
    /// Dial picks the saturation of a solid color
    Saturation,
    /// Dial picks the brightness value of a solid color
    Value,
    /// Dial picks the animation speed, no render
    Velocity,
    /// Dial triggers a rotating rainbow sweep
    ColorGradient,
    /// Dial triggers a bouncing single-dot sweep
    ColorDot,
    /// Dial triggers a brightness fade up and down
    ColorFading,
    /// Dial picks how many LEDs are lit
    ActiveLedCount,
    /// Dial events are ignored
    Off,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hue => MODE_NAME_HUE,
            Self::Saturation => MODE_NAME_SATURATION,
            Self::Value => MODE_NAME_VALUE,
            Self::Velocity => MODE_NAME_VELOCITY,
            Self::ColorGradient => MODE_NAME_COLOR_GRADIENT,
            Self::ColorDot => MODE_NAME_COLOR_DOT,
            Self::ColorFading => MODE_NAME_COLOR_FADING,
            Self::ActiveLedCount => MODE_NAME_ACTIVE_LED_COUNT,
            Self::Off => MODE_NAME_OFF,
        }
    }
}

/// One of the two physical strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripId {
    Left,
    Right,
}

/// Which physical strip(s) the next render applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripTarget {
    /// Renders are dropped (startup state)
    None,
    Left,
    Right,
    Both,
}

impl StripTarget {
    /// The concrete strips covered by this target.
    pub const fn strips(self) -> &'static [StripId] {
        match self {
            Self::None => &[],
            Self::Left => &[StripId::Left],
            Self::Right => &[StripId::Right],
            Self::Both => &[StripId::Left, StripId::Right],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }
}

/// Effect of a single touch panel button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    SelectMode(Mode),
    SelectTarget(StripTarget),
}

impl ButtonAction {
    /// Fixed panel layout: electrodes 0, 3 and 6 pick the strip target,
    /// the rest pick the mode. Indices past the panel are no action.
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::SelectTarget(StripTarget::Left),
            1 => Self::SelectMode(Mode::Hue),
            2 => Self::SelectMode(Mode::ColorGradient),
            3 => Self::SelectTarget(StripTarget::Both),
            4 => Self::SelectMode(Mode::Saturation),
            5 => Self::SelectMode(Mode::ColorDot),
            6 => Self::SelectTarget(StripTarget::Right),
            7 => Self::SelectMode(Mode::Value),
            8 => Self::SelectMode(Mode::ColorFading),
            9 => Self::SelectMode(Mode::Off),
            10 => Self::SelectMode(Mode::Velocity),
            11 => Self::SelectMode(Mode::ActiveLedCount),
            _ => return None,
        })
    }
}
