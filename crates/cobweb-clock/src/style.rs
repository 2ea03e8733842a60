use cobweb_engine::paint::Color;

/// Zone used when the host supplies none (or an invalid one and chooses to
/// fall back).
pub const DEFAULT_ZONE: &str = "Europe/Paris";

/// Zones offered by stock pickers. Purely advisory — any IANA identifier
/// is accepted at sampling time.
pub const WELL_KNOWN_ZONES: [&str; 5] = [
    "Europe/Paris",
    "America/New_York",
    "Australia/Sydney",
    "Asia/Shanghai",
    "Asia/Tokyo",
];

/// Per-element colors and stroke widths.
///
/// Plain values, re-read every frame: hosts may mutate the style between
/// frames (live color tweaking) without any binding machinery in the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub hour_markers: Color,
    pub minute_markers: Color,
    pub center_dot: Color,
    pub web: Color,
    /// Shared stroke width for all three hands.
    pub hand_width: f32,
    pub web_width: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            hour_hand: Color::from_srgb_u8(0xe8, 0xe8, 0xe8),
            minute_hand: Color::from_srgb_u8(0xb8, 0xc4, 0xd0),
            second_hand: Color::from_srgb_u8(0xe0, 0x4f, 0x3c),
            hour_markers: Color::from_srgb_u8(0xf0, 0xf0, 0xf0),
            minute_markers: Color::from_srgb_u8(0x6a, 0x72, 0x7c),
            center_dot: Color::from_srgb_u8(0xe0, 0x4f, 0x3c),
            web: Color::from_srgb_u8(0x8f, 0x9a, 0xa8),
            hand_width: 3.0,
            web_width: 0.2,
        }
    }
}

/// Frame-level configuration: where the clock reads its wall time and how
/// it is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// IANA zone identifier; validated at sampling time, not here.
    pub zone_id: String,
    pub style: ClockStyle,
}

impl ClockConfig {
    /// Default style in the given zone.
    pub fn with_zone(zone_id: impl Into<String>) -> Self {
        Self { zone_id: zone_id.into(), style: ClockStyle::default() }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::with_zone(DEFAULT_ZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_paris_zone() {
        assert_eq!(ClockConfig::default().zone_id, DEFAULT_ZONE);
    }

    #[test]
    fn well_known_zones_all_resolve() {
        for id in WELL_KNOWN_ZONES {
            assert!(cobweb_engine::time::resolve_zone(id).is_ok(), "{id}");
        }
    }

    #[test]
    fn default_widths_match_the_dial_design() {
        let style = ClockStyle::default();
        assert_eq!(style.hand_width, 3.0);
        assert_eq!(style.web_width, 0.2);
    }
}
