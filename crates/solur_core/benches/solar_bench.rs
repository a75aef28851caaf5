use criterion::{Criterion, black_box, criterion_group, criterion_main};
use solur_core::{Location, SolarEvent, event_local_hours};
use solur_time::{CivilDate, FixedOffsetResolver, TzOffsetResolver};

fn single_event_bench(c: &mut Criterion) {
    let loc = Location::new(56.09, 10.11).expect("valid location");
    let date = CivilDate::new(2024, 6, 21).expect("valid date");
    let fixed = FixedOffsetResolver(2.0);

    let mut group = c.benchmark_group("solar_event");
    group.bench_function("sunrise_fixed_offset", |b| {
        b.iter(|| {
            event_local_hours(
                black_box(&loc),
                black_box(&date),
                SolarEvent::Sunrise,
                black_box(&fixed),
            )
            .expect("event should exist")
        })
    });
    group.finish();
}

fn tz_lookup_bench(c: &mut Criterion) {
    let loc = Location::new(56.09, 10.11).expect("valid location");
    let date = CivilDate::new(2024, 6, 21).expect("valid date");
    let tz = TzOffsetResolver::new("Europe/Copenhagen").expect("known zone");

    let mut group = c.benchmark_group("solar_event");
    group.bench_function("sunrise_tz_lookup", |b| {
        b.iter(|| {
            event_local_hours(
                black_box(&loc),
                black_box(&date),
                SolarEvent::Sunrise,
                black_box(&tz),
            )
            .expect("event should exist")
        })
    });
    group.finish();
}

criterion_group!(benches, single_event_bench, tz_lookup_bench);
criterion_main!(benches);
