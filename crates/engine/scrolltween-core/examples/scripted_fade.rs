//! Drive a fade + translate timeline through a scripted scroll session and
//! print every style write the engine applies.

use anyhow::Result;

use scrolltween_core::{Config, Engine, PropSpec, TimelineConfig, TimingSpec};
use scrolltween_fixtures::MockHost;

fn main() -> Result<()> {
    let mut host = MockHost::new(800.0);
    let mut eng = Engine::new(Config::default());

    let cfg = TimelineConfig::new("0px", "400px")
        .prop(
            "--opacity",
            PropSpec::new("0", "1").with_timing(TimingSpec::named("ease-out-quad")),
        )
        .prop("--ty", PropSpec::new("0px", "-120px"))
        .on_inside(|id, precise, _| println!("  inside  {id:?} at {precise:.1}%"))
        .on_outside(|id, precise, _| println!("  outside {id:?} at {precise:.1}%"));

    let id = eng.create(cfg, &host)?;
    eng.start(id);

    for offset in [0.0, 100.0, 200.0, 200.0, 300.0, 400.0, 520.0] {
        host.set_scroll(offset);
        let out = eng.tick(&mut host)?;
        println!(
            "offset {offset:>5.1}: {} write(s)",
            out.writes.len()
        );
        for w in out.writes.iter() {
            println!("  {w}");
        }
    }

    Ok(())
}
