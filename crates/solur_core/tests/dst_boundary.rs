//! Behavior across the spring-forward DST transition: computed local
//! times one day before and after the boundary must differ by the DST
//! delta (1h) on top of the ordinary day-to-day drift.

use solur_core::{Location, sunrise};
use solur_time::{CivilDate, TzOffsetResolver, UtcOffsetResolver};

#[test]
fn copenhagen_spring_forward_2024() {
    // Transition was 2024-03-31 02:00 local
    let aarhus = Location::new(56.09, 10.11).unwrap();
    let tz = TzOffsetResolver::new("Europe/Copenhagen").unwrap();

    let before = CivilDate::new(2024, 3, 30).unwrap();
    let after = CivilDate::new(2024, 4, 1).unwrap();

    let off_before = tz.utc_offset_hours(&before).unwrap();
    let off_after = tz.utc_offset_hours(&after).unwrap();
    assert!((off_after - off_before - 1.0).abs() < 1e-12, "DST delta");

    let rise_before = sunrise(&aarhus, &before, &tz).unwrap();
    let rise_after = sunrise(&aarhus, &after, &tz).unwrap();

    // Two days of seasonal drift is ~4 min earlier; the offset change
    // pushes the wall-clock time a full hour later on net.
    let shift = rise_after - rise_before;
    assert!(
        (0.8..1.0).contains(&shift),
        "local sunrise shift across DST was {shift} h"
    );
}

#[test]
fn fall_back_2024() {
    // Transition was 2024-10-27 03:00 local
    let aarhus = Location::new(56.09, 10.11).unwrap();
    let tz = TzOffsetResolver::new("Europe/Copenhagen").unwrap();

    let before = CivilDate::new(2024, 10, 26).unwrap();
    let after = CivilDate::new(2024, 10, 28).unwrap();

    let off_before = tz.utc_offset_hours(&before).unwrap();
    let off_after = tz.utc_offset_hours(&after).unwrap();
    assert!((off_before - off_after - 1.0).abs() < 1e-12, "DST delta");

    let rise_before = sunrise(&aarhus, &before, &tz).unwrap();
    let rise_after = sunrise(&aarhus, &after, &tz).unwrap();

    // Autumn drift is ~4 min later per two days; falling back subtracts
    // an hour on the wall clock.
    let shift = rise_before - rise_after;
    assert!(
        (0.8..1.0).contains(&shift),
        "local sunrise shift across DST was {shift} h"
    );
}
