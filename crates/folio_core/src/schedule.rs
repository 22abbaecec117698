//! # Frame Scheduler
//!
//! Drives behaviours once per frame:
//! ```text
//! Frame N:
//! ┌──────────────────────────────────────────────────────┐
//! │ 1. AWAKE   every behaviour not yet awakened (once)    │
//! │ 2. UPDATE  every enabled behaviour, in insertion order│
//! │ 3. STATS   record frame time, warn if over budget     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Execution is single-threaded and synchronous. A frame is a complete unit
//! of work; disabling or removing a behaviour simply stops it being ticked.

use std::time::Instant;

use crate::config::SchedulerConfig;
use crate::scene::Scene;

/// Per-frame data handed to [`Behaviour::update`].
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Seconds since the previous frame, clamped to the configured maximum.
    pub delta_time: f32,
}

/// A component with an activation hook and a per-frame hook.
pub trait Behaviour {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Called once, before the first update.
    fn awake(&mut self, _scene: &Scene) {}

    /// Called once per frame while enabled.
    fn update(&mut self, ctx: &TickContext);
}

/// Identifier of a behaviour registered with a [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BehaviourId(u32);

struct Slot {
    id: BehaviourId,
    behaviour: Box<dyn Behaviour>,
    awakened: bool,
    enabled: bool,
}

/// Frame timing statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Frame number.
    pub frame: u64,
    /// Time spent in awake and update hooks, in microseconds.
    pub total_us: u64,
    /// Behaviours awakened this frame.
    pub awakened: u32,
    /// Behaviours updated this frame.
    pub updated: u32,
}

/// Orchestrates behaviour lifecycles frame by frame.
pub struct Scheduler {
    slots: Vec<Slot>,
    next_id: u32,
    config: SchedulerConfig,
    frame_count: u64,
    last_frame_time: Option<Instant>,
    stats: FrameStatsAccumulator,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            config,
            frame_count: 0,
            last_frame_time: None,
            stats: FrameStatsAccumulator::new(),
        }
    }

    /// Registers a behaviour. It is awakened on the next `activate` or `tick`.
    pub fn add(&mut self, behaviour: impl Behaviour + 'static) -> BehaviourId {
        let id = BehaviourId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            behaviour: Box::new(behaviour),
            awakened: false,
            enabled: true,
        });
        id
    }

    /// Removes a behaviour. Returns false if the ID is unknown.
    pub fn remove(&mut self, id: BehaviourId) -> bool {
        let Some(index) = self.slots.iter().position(|s| s.id == id) else {
            return false;
        };
        let slot = self.slots.remove(index);
        tracing::debug!("Removed behaviour {}", slot.behaviour.name());
        true
    }

    /// Enables or disables ticking of a behaviour.
    ///
    /// Returns false if the ID is unknown.
    pub fn set_enabled(&mut self, id: BehaviourId, enabled: bool) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Returns true if the behaviour exists and is enabled.
    #[must_use]
    pub fn is_enabled(&self, id: BehaviourId) -> bool {
        self.slots.iter().any(|s| s.id == id && s.enabled)
    }

    /// Awakens every behaviour that has not been awakened yet.
    ///
    /// Returns the number of behaviours awakened.
    pub fn activate(&mut self, scene: &Scene) -> u32 {
        let mut awakened = 0;
        for slot in self.slots.iter_mut().filter(|s| !s.awakened) {
            slot.behaviour.awake(scene);
            slot.awakened = true;
            awakened += 1;
        }
        awakened
    }

    /// Runs one frame: pending awakes, then one update per enabled behaviour.
    pub fn tick(&mut self, scene: &Scene) -> FrameStats {
        let start = Instant::now();
        let delta_time = self
            .last_frame_time
            .map_or(0.0, |last| start.duration_since(last).as_secs_f32())
            .min(self.config.max_delta_time);
        self.last_frame_time = Some(start);

        let awakened = self.activate(scene);

        let ctx = TickContext {
            frame: self.frame_count,
            delta_time,
        };
        let mut updated = 0;
        for slot in self.slots.iter_mut().filter(|s| s.enabled) {
            slot.behaviour.update(&ctx);
            updated += 1;
        }

        let stats = FrameStats {
            frame: self.frame_count,
            total_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            awakened,
            updated,
        };
        self.end_frame(stats);
        stats
    }

    fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        let budget_us = self.config.frame_budget_us();
        self.stats.record(stats, budget_us);

        if self.config.enable_timing_logs && stats.total_us > budget_us {
            tracing::warn!(
                "Frame {} exceeded budget: {:.3}ms (target: {:.3}ms)",
                stats.frame,
                stats.total_us as f64 / 1000.0,
                budget_us as f64 / 1000.0
            );
        }
        tracing::trace!(
            "Frame {}: {} awakened, {} updated in {}us",
            stats.frame,
            stats.awakened,
            stats.updated,
            stats.total_us
        );
    }

    /// Returns the number of frames run so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of registered behaviours.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no behaviour is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of frame times.
    pub total_us_sum: u64,
    /// Sum of behaviour updates.
    pub updates_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            updates_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records a frame's statistics against a budget in microseconds.
    pub fn record(&mut self, stats: FrameStats, budget_us: u64) {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.updates_sum += u64::from(stats.updated);
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);

        if stats.total_us > budget_us {
            self.frames_over_budget += 1;
        }
    }

    /// Returns average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Returns the share of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counters {
        awakes: AtomicU32,
        updates: AtomicU32,
        last_delta_bits: AtomicU32,
    }

    struct Recorder(Arc<Counters>);

    impl Behaviour for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn awake(&mut self, _scene: &Scene) {
            self.0.awakes.fetch_add(1, Ordering::Relaxed);
        }

        fn update(&mut self, ctx: &TickContext) {
            self.0.updates.fetch_add(1, Ordering::Relaxed);
            self.0
                .last_delta_bits
                .store(ctx.delta_time.to_bits(), Ordering::Relaxed);
        }
    }

    fn recorder() -> (Recorder, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        (Recorder(Arc::clone(&counters)), counters)
    }

    #[test]
    fn test_awake_runs_once() {
        let scene = Scene::new();
        let mut scheduler = Scheduler::default();
        let (behaviour, counters) = recorder();
        scheduler.add(behaviour);

        assert_eq!(scheduler.activate(&scene), 1);
        assert_eq!(scheduler.activate(&scene), 0);
        for _ in 0..3 {
            let stats = scheduler.tick(&scene);
            assert_eq!(stats.awakened, 0);
            assert_eq!(stats.updated, 1);
        }

        assert_eq!(counters.awakes.load(Ordering::Relaxed), 1);
        assert_eq!(counters.updates.load(Ordering::Relaxed), 3);
        assert_eq!(scheduler.frame_count(), 3);
    }

    #[test]
    fn test_tick_awakens_late_additions_before_update() {
        let scene = Scene::new();
        let mut scheduler = Scheduler::default();
        scheduler.tick(&scene);

        let (behaviour, counters) = recorder();
        scheduler.add(behaviour);
        let stats = scheduler.tick(&scene);

        assert_eq!(stats.frame, 1);
        assert_eq!(stats.awakened, 1);
        assert_eq!(counters.awakes.load(Ordering::Relaxed), 1);
        assert_eq!(counters.updates.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_disabled_behaviour_is_not_ticked() {
        let scene = Scene::new();
        let mut scheduler = Scheduler::default();
        let (behaviour, counters) = recorder();
        let id = scheduler.add(behaviour);

        scheduler.tick(&scene);
        assert!(scheduler.set_enabled(id, false));
        assert!(!scheduler.is_enabled(id));
        scheduler.tick(&scene);
        scheduler.tick(&scene);
        assert_eq!(counters.updates.load(Ordering::Relaxed), 1);

        assert!(scheduler.set_enabled(id, true));
        scheduler.tick(&scene);
        assert_eq!(counters.updates.load(Ordering::Relaxed), 2);
        assert_eq!(counters.awakes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_removed_behaviour_is_dropped() {
        let scene = Scene::new();
        let mut scheduler = Scheduler::default();
        let (behaviour, counters) = recorder();
        let id = scheduler.add(behaviour);

        assert!(scheduler.remove(id));
        assert!(!scheduler.remove(id));
        assert!(!scheduler.set_enabled(id, true));
        assert!(scheduler.is_empty());
        scheduler.tick(&scene);
        assert_eq!(Arc::strong_count(&counters), 1);
    }

    #[test]
    fn test_delta_time_is_clamped() {
        let scene = Scene::new();
        let mut scheduler = Scheduler::new(SchedulerConfig {
            max_delta_time: 0.001,
            ..SchedulerConfig::default()
        });
        let (behaviour, counters) = recorder();
        scheduler.add(behaviour);
        let last_delta = || f32::from_bits(counters.last_delta_bits.load(Ordering::Relaxed));

        scheduler.tick(&scene);
        assert!(last_delta().abs() < f32::EPSILON, "first frame has no delta");

        std::thread::sleep(std::time::Duration::from_millis(20));
        scheduler.tick(&scene);
        assert!((last_delta() - 0.001).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stats_accumulator() {
        let mut acc = FrameStatsAccumulator::new();
        for i in 0..10 {
            acc.record(
                FrameStats {
                    frame: i,
                    total_us: 1000 + i * 1000,
                    awakened: 0,
                    updated: 2,
                },
                5000,
            );
        }

        assert_eq!(acc.frames_recorded, 10);
        assert_eq!(acc.updates_sum, 20);
        assert_eq!(acc.min_frame_us, 1000);
        assert_eq!(acc.max_frame_us, 10_000);
        assert_eq!(acc.frames_over_budget, 5);
        assert!((acc.over_budget_ratio() - 0.5).abs() < f64::EPSILON);
        assert!((acc.avg_frame_ms() - 5.5).abs() < 1e-9);
    }
}
