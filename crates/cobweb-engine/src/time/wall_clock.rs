use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use super::TimeComponents;

/// Wall-clock sampling errors.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TimeError {
    /// The zone identifier is not in the IANA database.
    ///
    /// Surfaced immediately; callers are expected to fall back to a
    /// known-good zone rather than crash their render loop.
    #[error("unrecognized timezone identifier `{0}`")]
    InvalidTimezone(String),
}

/// Parses an IANA zone identifier (e.g. `"Europe/Paris"`).
pub fn resolve_zone(zone_id: &str) -> Result<Tz, TimeError> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone(zone_id.to_owned()))
}

/// Samples the system clock and resolves it in `zone_id`.
///
/// The instant is read fresh on every call; nothing is cached across
/// frames.
pub fn sample(zone_id: &str) -> Result<TimeComponents, TimeError> {
    let tz = resolve_zone(zone_id)?;
    Ok(components_at(Utc::now(), tz))
}

/// Projects a known instant into `tz`.
///
/// Deterministic counterpart of [`sample`], for tests and hosts that
/// sample or replay instants themselves.
pub fn components_at(instant: DateTime<Utc>, tz: Tz) -> TimeComponents {
    let local = instant.with_timezone(&tz);

    // The sub-second fraction comes from the instant, not the zoned view:
    // zone offsets are whole minutes, so the fraction is zone-invariant.
    // chrono folds leap seconds into this field as values >= 1000ms; clamp
    // so `subsec` stays below one full second.
    let millis = instant.timestamp_subsec_millis().min(999);

    TimeComponents::new(
        local.hour(),
        local.minute(),
        local.second(),
        millis as f64 / 1000.0,
    )
}
