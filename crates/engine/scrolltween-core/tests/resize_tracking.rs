//! Resize coordination: debounce, tracked recalculation, immediate re-render.

use scrolltween_core::{Config, ConfigError, Engine, EngineEvent, PropSpec, TimelineConfig};
use scrolltween_fixtures::MockHost;

fn relative_fade() -> TimelineConfig {
    TimelineConfig::new("top-bottom", "top-top")
        .elem("hero")
        .prop("--opacity", PropSpec::new("0", "1"))
}

/// it should hold recalculation until the debounce window elapses
#[test]
fn debounce_waits_for_quiescence() {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 800.0, 200.0);

    let mut eng = Engine::new(Config::default());
    let id = eng.create(relative_fade(), &host).unwrap();

    eng.notify_resize(&host);
    let out = eng.tick(&mut host).unwrap();
    assert!(out.events.is_empty(), "deadline not reached yet");

    host.advance_ms(30.0);
    assert!(eng.tick(&mut host).unwrap().events.is_empty());

    host.advance_ms(30.0);
    let out = eng.tick(&mut host).unwrap();
    assert_eq!(out.events[0], EngineEvent::Recalculated { instance: id });
}

/// it should push the deadline out on every resize notification
#[test]
fn repeated_resize_extends_deadline() {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 800.0, 200.0);

    let mut eng = Engine::new(Config::default());
    let _id = eng.create(relative_fade(), &host).unwrap();

    eng.notify_resize(&host);
    host.advance_ms(40.0);
    eng.notify_resize(&host);
    host.advance_ms(40.0);
    assert!(
        eng.tick(&mut host).unwrap().events.is_empty(),
        "second notification restarted the window"
    );

    host.advance_ms(20.0);
    assert!(!eng.tick(&mut host).unwrap().events.is_empty());
}

/// it should re-resolve relative boundaries and re-render, offset unchanged
#[test]
fn tracked_instances_rerender_after_resize() {
    let mut host = MockHost::new(800.0);
    // Element below the fold: fade-in runs from offset 200 (top meets bottom
    // edge) to offset 1000 (top meets top edge).
    host.set_element("hero", 1000.0, 300.0);

    let mut eng = Engine::new(Config::default());
    let id = eng.create(relative_fade(), &host).unwrap();
    eng.start(id);

    host.set_scroll(600.0);
    eng.tick(&mut host).unwrap();
    assert_eq!(host.values_for("--opacity"), ["0.5"]);

    // Viewport shrinks: the same element now meets the bottom edge later.
    host.set_viewport(400.0);
    host.set_element("hero", 400.0, 300.0);
    eng.notify_resize(&host);
    host.advance_ms(60.0);

    let out = eng.tick(&mut host).unwrap();
    assert_eq!(out.events[0], EngineEvent::Recalculated { instance: id });
    // from = 1000 - 400 = 600, to = 1000; offset 600 is now 0%.
    assert_eq!(host.values_for("--opacity"), ["0.5", "0"]);
    let resolved = eng.resolved_config(id).unwrap();
    assert_eq!(resolved.from.value, 600.0);
    assert_eq!(resolved.to.value, 1000.0);
}

/// it should recalculate tracked instances even while they are stopped
#[test]
fn inactive_tracked_instances_still_recalculate() {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 800.0, 200.0);

    let mut eng = Engine::new(Config::default());
    let id = eng.create(relative_fade(), &host).unwrap();
    // never started

    eng.notify_resize(&host);
    host.advance_ms(60.0);
    let out = eng.tick(&mut host).unwrap();
    assert_eq!(out.events[0], EngineEvent::Recalculated { instance: id });
    assert_eq!(host.values_for("--opacity").len(), 1, "update applied");
}

/// it should leave untracked instances alone on resize
#[test]
fn untracked_instances_skipped() {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 800.0, 200.0);

    let mut eng = Engine::new(Config::default());
    let _untracked = eng
        .create(relative_fade().tracked(false), &host)
        .unwrap();

    eng.notify_resize(&host);
    host.advance_ms(60.0);
    let out = eng.tick(&mut host).unwrap();
    assert!(out.events.is_empty());
    assert!(host.writes.is_empty());
}

/// it should surface recalculation failures as fatal errors
#[test]
fn recalculation_errors_propagate() {
    let mut host = MockHost::new(800.0);
    host.set_element("hero", 800.0, 200.0);

    let mut eng = Engine::new(Config::default());
    let _id = eng.create(relative_fade(), &host).unwrap();

    // The element vanishes before the resize settles.
    let mut gone = MockHost::new(800.0);
    eng.notify_resize(&gone);
    gone.advance_ms(60.0);
    assert!(matches!(
        eng.tick(&mut gone),
        Err(ConfigError::UnknownElement(handle)) if handle == "hero"
    ));
}
