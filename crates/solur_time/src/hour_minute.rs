//! Fractional-hour → wall-clock formatting.

/// A wall-clock hour/minute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourMinute {
    pub hour: u32,
    pub minute: u32,
}

impl HourMinute {
    /// Split a fractional hour into whole hours and minutes by flooring.
    ///
    /// No rounding and no seconds: 4.5345 h becomes 04:32. The input must
    /// already be normalized to [0, 24); this function does not
    /// re-normalize.
    pub fn from_hours(hours: f64) -> Self {
        let whole = hours.floor();
        let minute = (60.0 * (hours - whole)).floor() as u32;
        Self {
            hour: whole as u32,
            minute,
        }
    }
}

impl std::fmt::Display for HourMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Render a normalized fractional hour as zero-padded 24-hour `"HH:MM"`.
pub fn format_hours(hours: f64) -> String {
    HourMinute::from_hours(hours).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight() {
        assert_eq!(format_hours(0.0), "00:00");
    }

    #[test]
    fn half_past_noon() {
        let hm = HourMinute::from_hours(12.5);
        assert_eq!(hm, HourMinute { hour: 12, minute: 30 });
        assert_eq!(hm.to_string(), "12:30");
    }

    #[test]
    fn floors_not_rounds() {
        // 23.999 h is 23:59 and 57.6 s; flooring must not carry to 24:00
        assert_eq!(format_hours(23.999), "23:59");
    }

    #[test]
    fn aarhus_summer_sunrise() {
        assert_eq!(format_hours(4.5345), "04:32");
    }

    #[test]
    fn single_digit_padding() {
        assert_eq!(format_hours(7.0833), "07:04");
    }

    #[test]
    fn pair_brackets_input() {
        // h + m/60 <= f < h + (m+1)/60 over a sweep of the day
        let mut f = 0.0;
        while f < 24.0 {
            let hm = HourMinute::from_hours(f);
            assert!(hm.hour < 24, "hour out of range for {f}");
            assert!(hm.minute < 60, "minute out of range for {f}");
            let lo = f64::from(hm.hour) + f64::from(hm.minute) / 60.0;
            let hi = f64::from(hm.hour) + f64::from(hm.minute + 1) / 60.0;
            assert!(lo <= f && f < hi, "{f} not bracketed by [{lo}, {hi})");
            f += 0.137;
        }
    }
}
