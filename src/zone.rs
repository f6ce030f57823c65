use chrono::{DateTime, Duration, Offset, TimeZone, Utc};

/// Resolves the local UTC offset in force at an instant.
pub trait ZoneResolver {
    fn offset_at(&self, instant: DateTime<Utc>) -> Duration;
}

// Covers chrono::Local, FixedOffset, Utc and chrono_tz::Tz.
impl<Tz: TimeZone> ZoneResolver for Tz {
    fn offset_at(&self, instant: DateTime<Utc>) -> Duration {
        let offset = self.offset_from_utc_datetime(&instant.naive_utc()).fix();
        Duration::seconds(i64::from(offset.local_minus_utc()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_fixed_offset() {
        let zone = FixedOffset::east_opt(-5 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(zone.offset_at(instant), Duration::hours(-5));
        assert_eq!(Utc.offset_at(instant), Duration::zero());
    }

    #[test]
    fn test_named_zone_follows_daylight_saving() {
        let london: &dyn ZoneResolver = &chrono_tz::Europe::London;
        let winter = Utc.with_ymd_and_hms(2024, 3, 31, 0, 59, 59).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 3, 31, 1, 0, 0).unwrap();
        assert_eq!(london.offset_at(winter), Duration::zero());
        assert_eq!(london.offset_at(summer), Duration::hours(1));
    }
}
