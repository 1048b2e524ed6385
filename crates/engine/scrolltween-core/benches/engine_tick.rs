use criterion::{criterion_group, criterion_main, Criterion};

use scrolltween_core::{Config, Engine, PropSpec, TimelineConfig, TimingSpec};
use scrolltween_fixtures::MockHost;

fn bench_tick(c: &mut Criterion) {
    let mut host = MockHost::new(800.0);
    let mut eng = Engine::new(Config::default());
    for i in 0..64 {
        let cfg = TimelineConfig::new("0px", "1000px")
            .prop(format!("--p{i}"), PropSpec::new("0px", "120px"))
            .prop(
                format!("--o{i}"),
                PropSpec::new("0", "1").with_timing(TimingSpec::named("ease-in-out-cubic")),
            );
        let id = eng.create(cfg, &host).unwrap();
        eng.start(id);
    }

    let mut offset = 0.0f32;
    c.bench_function("tick_64_instances", |b| {
        b.iter(|| {
            // Every iteration moves the offset so change detection never skips.
            offset = (offset + 7.0) % 1000.0;
            host.set_scroll(offset);
            eng.tick(&mut host).unwrap();
            host.clear_writes();
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
