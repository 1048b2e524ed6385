//! Relative boundaries and resize recalculation: a hero element fades in
//! while it travels from the bottom to the top of the viewport, and keeps
//! doing so after the viewport shrinks.

use anyhow::Result;

use scrolltween_core::{Config, Engine, PropSpec, TargetSpec, TimelineConfig};
use scrolltween_fixtures::MockHost;

fn main() -> Result<()> {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 1200.0, 300.0);

    let mut eng = Engine::new(Config::default());
    let cfg = TimelineConfig::new("top-bottom", "top-top")
        .elem("hero")
        .direct(TargetSpec::Direct(true))
        .prop("--reveal", PropSpec::new("0", "1"));
    let id = eng.create(cfg, &host)?;
    eng.start(id);

    let resolved = eng.resolved_config(id).expect("resolved at creation");
    println!("range: {} .. {}", resolved.from, resolved.to);

    for offset in [0.0, 400.0, 800.0, 1200.0] {
        host.set_scroll(offset);
        // Keep the element's viewport-relative rect consistent with the scroll.
        host.set_element("hero", 1200.0 - offset, 300.0);
        eng.tick(&mut host)?;
        if let Some(w) = host.last_write_for("--reveal") {
            println!("offset {offset:>6.1}: {w}");
        }
    }

    // The viewport shrinks; tracked instances re-resolve after 50ms of quiet.
    host.set_viewport(500.0);
    eng.notify_resize(&host);
    host.advance_ms(60.0);
    eng.tick(&mut host)?;

    let resolved = eng.resolved_config(id).expect("still live");
    println!("range after resize: {} .. {}", resolved.from, resolved.to);

    Ok(())
}
