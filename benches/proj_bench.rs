use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geoproj::proj::ellipsoid::GRS80;
use geoproj::{ProjParams, Projection};

fn europe_laea() -> Projection {
    let params = ProjParams {
        lon0: 10.0_f64.to_radians(),
        lat0: 52.0_f64.to_radians(),
        false_easting: 4_321_000.0,
        false_northing: 3_210_000.0,
        ..ProjParams::default()
    };
    Projection::lambert_azimuthal_equal_area(GRS80, &params).unwrap()
}

fn grid(n: usize) -> Vec<(f64, f64)> {
    let mut pts = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let lon = (-10.0 + 40.0 * i as f64 / n as f64).to_radians();
            let lat = (36.0 + 34.0 * j as f64 / n as f64).to_radians();
            pts.push((lon, lat));
        }
    }
    pts
}

fn bench_forward(c: &mut Criterion) {
    let utm = Projection::utm_zone(33, true).unwrap();
    let laea = europe_laea();
    let pts = grid(32);

    c.bench_function("utm_forward_1k", |b| {
        b.iter(|| {
            for &(lon, lat) in &pts {
                black_box(utm.forward(black_box(lon), black_box(lat)).unwrap());
            }
        })
    });

    c.bench_function("laea_forward_1k", |b| {
        b.iter(|| {
            for &(lon, lat) in &pts {
                black_box(laea.forward(black_box(lon), black_box(lat)).unwrap());
            }
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let utm = Projection::utm_zone(33, true).unwrap();
    let mut projected = grid(32);
    utm.forward_batch(&mut projected).unwrap();

    c.bench_function("utm_inverse_1k", |b| {
        b.iter(|| {
            for &(x, y) in &projected {
                black_box(utm.inverse(black_box(x), black_box(y)).unwrap());
            }
        })
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("laea_construction", |b| {
        b.iter(|| black_box(europe_laea()))
    });
}

criterion_group!(benches, bench_forward, bench_inverse, bench_construction);
criterion_main!(benches);
