//! Engine: instance registry and the per-tick update loop.
//!
//! The engine owns every timeline instance in a slot arena: `destroy` vacates
//! a slot without shifting the others, so outstanding `InstanceId`s stay
//! structurally stable and a destroyed instance can never be scheduled again.
//! Adapters drive the loop by calling `tick` once per display frame; the
//! engine itself never blocks and never reschedules.

use scrolltween_api::{Host, StyleBatch, StyleWrite};

use crate::config::Config;
use crate::ids::InstanceId;
use crate::outputs::{EngineEvent, TickOutputs};
use crate::progress::{compute_writes, scroll_progress};
use crate::timeline::TimelineConfig;
use crate::validate::{validate, ConfigError, ResolvedTimeline};

/// One timeline instance: the raw config it was created from, the current
/// resolved snapshot, and its scheduling state.
#[derive(Debug)]
pub struct Instance {
    pub id: InstanceId,
    raw: TimelineConfig,
    resolved: Option<ResolvedTimeline>,
    active: bool,
    /// Last inside/outside classification, for crossing events.
    was_inside: Option<bool>,
}

/// Engine (core). All environment access goes through the `Host` passed into
/// each call; the engine holds no ambient references.
#[derive(Debug, Default)]
pub struct Engine {
    cfg: Config,
    slots: Vec<Option<Instance>>,

    /// Offset seen by the last tick that did work; unchanged offsets skip
    /// the frame.
    last_offset: Option<f32>,
    /// Deadline armed by `notify_resize`, drained by `tick`.
    resize_deadline: Option<f64>,

    // Per-tick outputs
    outputs: TickOutputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    /// Validate a configuration and register an instance for it. The instance
    /// starts inactive; `start` opts it into the tick loop.
    pub fn create(
        &mut self,
        cfg: TimelineConfig,
        host: &dyn Host,
    ) -> Result<InstanceId, ConfigError> {
        let resolved = validate(&cfg, host)?;
        let id = InstanceId(self.slots.len() as u32);
        self.slots.push(Some(Instance {
            id,
            raw: cfg,
            resolved: Some(resolved),
            active: false,
            was_inside: None,
        }));
        Ok(id)
    }

    /// Mark an instance active. No immediate recalculation or render; the
    /// next tick picks it up. No-op on destroyed ids.
    pub fn start(&mut self, id: InstanceId) {
        if let Some(Some(inst)) = self.slots.get_mut(id.index()) {
            inst.active = true;
        }
    }

    /// Mark an instance inactive. The next tick simply excludes it.
    pub fn stop(&mut self, id: InstanceId) {
        if let Some(Some(inst)) = self.slots.get_mut(id.index()) {
            inst.active = false;
        }
    }

    /// Vacate the instance's slot. Permanent: the id never resolves again and
    /// later `start` calls on it are no-ops.
    pub fn destroy(&mut self, id: InstanceId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            *slot = None;
        }
    }

    pub fn is_active(&self, id: InstanceId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(inst)) if inst.active)
    }

    /// The instance's current resolved configuration, if it is alive.
    pub fn resolved_config(&self, id: InstanceId) -> Option<&ResolvedTimeline> {
        match self.slots.get(id.index()) {
            Some(Some(inst)) => inst.resolved.as_ref(),
            _ => None,
        }
    }

    /// Re-run validation on the originally supplied raw configuration and
    /// replace the resolved snapshot. Used after geometry changes. No-op on
    /// destroyed ids; on failure the previous snapshot is kept.
    pub fn calculate(&mut self, id: InstanceId, host: &dyn Host) -> Result<(), ConfigError> {
        if let Some(Some(inst)) = self.slots.get_mut(id.index()) {
            inst.resolved = Some(validate(&inst.raw, host)?);
            inst.was_inside = None;
        }
        Ok(())
    }

    /// Interpolate the instance at the host's current scroll offset, fire its
    /// inside/outside hook, and apply the writes immediately. Returns the
    /// computed batch, or None for destroyed ids. Bypasses the tick loop's
    /// change detection.
    pub fn update(&mut self, id: InstanceId, host: &mut dyn Host) -> Option<StyleBatch> {
        let offset = host.scroll_offset();
        let writes = self.render_slot(id.index(), offset)?;
        for w in &writes {
            host.set_property(&w.target, &w.key, &w.value);
        }
        Some(StyleBatch(writes))
    }

    /// Arm the debounced resize recalculation. Call from the host's resize
    /// event; each call pushes the deadline out by the configured window.
    pub fn notify_resize(&mut self, host: &dyn Host) {
        self.resize_deadline = Some(host.now_ms() + self.cfg.resize_debounce_ms);
    }

    /// Step the loop by one frame: drain a due resize recalculation, then
    /// re-render every active instance if the scroll offset moved. The host
    /// adapter reschedules unconditionally, whatever this returns.
    pub fn tick(&mut self, host: &mut dyn Host) -> Result<&TickOutputs, ConfigError> {
        self.outputs.clear();

        // 1) Geometry may have changed: recalculate tracked instances once
        //    the resize storm has settled, independent of change detection.
        if self.resize_deadline.map_or(false, |d| host.now_ms() >= d) {
            self.resize_deadline = None;
            self.recalculate_tracked(host)?;
        }

        // 2) Only continue when active instances are available.
        if !self.slots.iter().flatten().any(|inst| inst.active) {
            return Ok(&self.outputs);
        }

        // 3) Only continue when the scroll offset has changed.
        let offset = host.scroll_offset();
        if self.last_offset == Some(offset) {
            return Ok(&self.outputs);
        }
        self.last_offset = Some(offset);

        // 4) Compute new props for each active instance, in slot order.
        let mut writes: Vec<StyleWrite> = Vec::new();
        for idx in 0..self.slots.len() {
            let active = matches!(&self.slots[idx], Some(inst) if inst.active);
            if !active {
                continue;
            }
            if let Some(batch) = self.render_slot(idx, offset) {
                writes.extend(batch);
            }
        }

        // 5) Apply everything, in the order it was computed.
        for w in &writes {
            host.set_property(&w.target, &w.key, &w.value);
        }
        self.outputs.writes.extend(writes);

        Ok(&self.outputs)
    }

    /// Number of live (non-destroyed) instances.
    pub fn live_instances(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Number of live instances currently active.
    pub fn active_instances(&self) -> usize {
        self.slots.iter().flatten().filter(|i| i.active).count()
    }

    /// `calculate` + immediate re-render for every live tracked instance.
    fn recalculate_tracked(&mut self, host: &mut dyn Host) -> Result<(), ConfigError> {
        let offset = host.scroll_offset();
        let mut writes: Vec<StyleWrite> = Vec::new();

        for idx in 0..self.slots.len() {
            let mut recalculated = None;
            if let Some(inst) = self.slots[idx].as_mut() {
                if inst.resolved.as_ref().map_or(false, |r| r.track) {
                    inst.resolved = Some(validate(&inst.raw, host)?);
                    inst.was_inside = None;
                    recalculated = Some(inst.id);
                }
            }
            if let Some(id) = recalculated {
                self.outputs
                    .push_event(EngineEvent::Recalculated { instance: id });
                if let Some(batch) = self.render_slot(idx, offset) {
                    writes.extend(batch);
                }
            }
        }

        for w in &writes {
            host.set_property(&w.target, &w.key, &w.value);
        }
        self.outputs.writes.extend(writes);
        Ok(())
    }

    /// Interpolate one slot at `offset`: compute writes, record crossing
    /// events, and fire exactly one of the inside/outside hooks.
    fn render_slot(&mut self, idx: usize, offset: f32) -> Option<Vec<StyleWrite>> {
        let inst = self.slots.get_mut(idx)?.as_mut()?;
        let resolved = inst.resolved.as_ref()?;

        let progress = scroll_progress(&resolved.from, &resolved.to, offset);
        let writes = compute_writes(resolved, &progress);

        let inside = progress.is_inside();
        if inst.was_inside != Some(inside) {
            let event = if inside {
                EngineEvent::RangeEntered {
                    instance: inst.id,
                    precise: progress.precise,
                }
            } else {
                EngineEvent::RangeExited {
                    instance: inst.id,
                    precise: progress.precise,
                }
            };
            self.outputs.push_event(event);
        }
        inst.was_inside = Some(inside);

        let id = inst.id;
        let hook = if inside {
            inst.raw.inside.as_mut()
        } else {
            inst.raw.outside.as_mut()
        };
        if let Some(hook) = hook {
            hook.call(id, progress.precise, &writes);
        }

        Some(writes)
    }
}
