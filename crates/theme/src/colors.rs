use hwmon_core::{HwmonError, Result};

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Parse an RGBA hex colour: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`,
    /// with or without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = normalize_hex(hex)?;

        let byte = |s: &str| -> Result<f32> {
            u8::from_str_radix(s, 16)
                .map(|b| b as f32 / 255.0)
                .map_err(|e| HwmonError::Config(format!("invalid RGBA hex color {hex:?}: {e}")))
        };

        Ok(Self {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
            a: byte(&hex[6..8])?,
        })
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantise to 8-bit channels.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Expand a hex colour to its 8-digit lowercase RGBA form.
///
/// Shorthand forms double each digit; a 6-digit colour gets `ff` alpha.
pub fn normalize_hex(hex: &str) -> Result<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HwmonError::Config(format!("invalid RGBA hex color: {digits:?}")));
    }

    let digits = digits.to_ascii_lowercase();
    let doubled = |s: &str| s.chars().flat_map(|c| [c, c]).collect::<String>();

    let expanded = match digits.len() {
        3 => doubled(&digits) + "ff",
        4 => doubled(&digits),
        6 => digits + "ff",
        8 => digits,
        _ => return Err(HwmonError::Config(format!("invalid RGBA hex color: {digits:?}"))),
    };
    Ok(expanded)
}
