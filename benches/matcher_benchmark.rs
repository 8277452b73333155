use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hm_matcher_rs::{Frame, HmMatcher, Matcher, MatcherConfig, Object, Track};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scene(size: usize) -> (Vec<Track>, Frame) {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let extent = size as f64 * 2.0;
    let tracks = (0..size)
        .map(|i| {
            let obs = Object::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent), 0.0)
                .with_velocity(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0);
            Track::new(i as u64, obs, 0.0)
        })
        .collect::<Vec<_>>();
    let objects = tracks
        .iter()
        .map(|t| {
            Object::new(
                t.obs.center.x + t.obs.velocity.x * 0.1 + rng.gen_range(-0.3..0.3),
                t.obs.center.y + t.obs.velocity.y * 0.1 + rng.gen_range(-0.3..0.3),
                0.0,
            )
        })
        .collect();
    (tracks, Frame::new(0.1, objects))
}

fn bench_match_tracks(c: &mut Criterion) {
    let matcher = HmMatcher::new(MatcherConfig::new(2.0, 4.0));
    let mut group = c.benchmark_group("hm_matcher");
    for size in [10, 50, 100] {
        let (tracks, frame) = scene(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| matcher.match_tracks(black_box(&tracks), black_box(&frame)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_match_tracks);
criterion_main!(benches);
