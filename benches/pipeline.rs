use airq::{aggregate, enrich, Field, GroupKey, Observation, Pollutant, WindDirection};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// One year of hourly records with a gap every 7th hour and an unknown wind label every 50th.
fn synthetic_year() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid start");
    (0..365 * 24)
        .map(|i| {
            let mut obs = Observation {
                datetime: start + Duration::hours(i),
                ..Default::default()
            };
            if i % 7 != 0 {
                let wave = (i as f64 / 24.0).sin().abs();
                for (k, pollutant) in Pollutant::ALL.iter().enumerate() {
                    obs.concentrations.set(*pollutant, Some(5.0 + 60.0 * wave * (k + 1) as f64));
                }
                obs.meteorology.temperature = Some(10.0 * wave);
                obs.meteorology.wind_speed = Some(2.0 + wave);
            }
            let label = if i % 50 == 0 {
                "cv"
            } else {
                WindDirection::ALL[(i % 16) as usize].label()
            };
            obs.with_wind_direction(label)
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let observations = synthetic_year();
    c.bench_function("enrich_year", |b| {
        b.iter(|| enrich(black_box(observations.clone())))
    });

    let enriched = enrich(observations);
    let fields = [Field::Pollutant(Pollutant::Pm25), Field::Aqi];
    c.bench_function("aggregate_year_month", |b| {
        b.iter(|| aggregate(black_box(enriched.rows()), GroupKey::YearMonth, &fields))
    });
    c.bench_function("wind_profile_by_hour", |b| {
        b.iter(|| black_box(&enriched).wind_profile_by_hour())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
