/// BT.709 luma weights applied to gamma-encoded 8-bit channels.
pub const LUMA_R: f64 = 0.2126;
pub const LUMA_G: f64 = 0.7152;
pub const LUMA_B: f64 = 0.0722;

/// Weight of saturation in the hue sort key.
pub const HUE_KEY_SATURATION: f64 = 0.08;
/// Weight of value in the hue sort key.
pub const HUE_KEY_VALUE: f64 = 0.02;

/// Luma in [0, 255].
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// HSV color with every component normalized.
///
/// h: [0, 1), s: [0, 1], v: [0, 1]. Achromatic colors have h = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Sort key ordering primarily by hue, with saturation and value as
    /// minor weights.
    #[inline]
    pub fn sort_key(self) -> f64 {
        self.h + HUE_KEY_SATURATION * self.s + HUE_KEY_VALUE * self.v
    }
}

/// Hexcone RGB → HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };

    if delta == 0.0 {
        return Hsv::new(0.0, s, max);
    }

    // Sector offsets: red 0, green 2, blue 4 (in sixths of a turn)
    let sector = if r >= g && r >= b {
        (gf - bf) / delta
    } else if g >= b {
        2.0 + (bf - rf) / delta
    } else {
        4.0 + (rf - gf) / delta
    };

    let mut h = sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }
    Hsv::new(h, s, max)
}
