/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Invariant:
/// - channels are straight (not premultiplied); backends that composite in
///   premultiplied space convert at their own boundary.
///
/// Host configuration supplies these as hex literals (`#rrggbb`,
/// `#rrggbbaa`), so the constructors mirror that.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Opaque color from `f32` channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from sRGB bytes (`0`–`255`), opaque.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parses a CSS-style hex literal: `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional. Returns `None` for any other shape;
    /// callers treat that as "keep the previous color", so this never
    /// panics on user input.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // Byte length check only holds for ASCII; reject anything else
        // before slicing at fixed offsets.
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Some(Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// CSS serialization for text backends: `rgb(...)` when opaque,
    /// `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        let c = self.clamped();
        let r = (c.r * 255.0).round() as u8;
        let g = (c.g * 255.0).round() as u8;
        let b = (c.b * 255.0).round() as u8;

        if c.a >= 1.0 {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgba({r},{g},{b},{:.3})", c.a)
        }
    }
}
