//! Fixed-rate cycle loop.
//!
//! Cycle `n` is due `n` periods after the first one. A cycle that overruns its slot is followed
//! immediately by the next, and the schedule is re-anchored instead of bursting to catch up.
//! A failed cycle is logged and the loop moves on; only a stop request or `max_cycles` ends it.

use crate::config::RendererConfig;
use crate::cycle::Renderer;
use crate::encode::sink::FrameSink;
use crate::foundation::error::CellviewResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Upper bound on how long a stop request can go unnoticed while sleeping.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Cloneable flag that asks a running [`Scheduler`] to stop after the current cycle.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerReport {
    /// Cycles attempted, successful or not.
    pub cycles_run: u64,
    pub cycles_failed: u64,
}

#[derive(Debug)]
pub struct Scheduler {
    period: Duration,
    max_cycles: Option<u64>,
    stop: StopHandle,
}

impl Scheduler {
    pub fn new(period: Duration, max_cycles: Option<u64>) -> Self {
        Self {
            period,
            max_cycles,
            stop: StopHandle::new(),
        }
    }

    pub fn from_config(cfg: &RendererConfig) -> Self {
        Self::new(cfg.period(), cfg.max_cycles)
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run `cycle` at the configured rate until stopped or `max_cycles` is reached.
    pub fn run<F>(&self, mut cycle: F) -> SchedulerReport
    where
        F: FnMut(u64) -> CellviewResult<()>,
    {
        let mut report = SchedulerReport::default();
        let mut next_due = Instant::now();

        while !self.stop.is_stopped() && !self.exhausted(report.cycles_run) {
            let idx = report.cycles_run;
            if let Err(e) = cycle(idx) {
                report.cycles_failed += 1;
                tracing::error!(cycle = idx, "cycle failed: {e}");
            }
            report.cycles_run += 1;

            if self.exhausted(report.cycles_run) {
                break;
            }

            next_due += self.period;
            let now = Instant::now();
            if now >= next_due {
                tracing::warn!(
                    cycle = idx,
                    behind_ms = (now - next_due).as_millis() as u64,
                    "cycle overran its slot"
                );
                next_due = now;
                continue;
            }
            self.sleep_until(next_due);
        }

        tracing::info!(
            cycles = report.cycles_run,
            failed = report.cycles_failed,
            "scheduler stopped"
        );
        report
    }

    /// Drive `renderer` into `sink` on this scheduler.
    pub fn run_renderer(
        &self,
        renderer: &mut Renderer,
        sink: &mut dyn FrameSink,
    ) -> SchedulerReport {
        self.run(|idx| renderer.render_cycle(idx, &mut *sink).map(|_| ()))
    }

    fn exhausted(&self, cycles_run: u64) -> bool {
        self.max_cycles.is_some_and(|max| cycles_run >= max)
    }

    fn sleep_until(&self, due: Instant) {
        while !self.stop.is_stopped() {
            let now = Instant::now();
            if now >= due {
                break;
            }
            std::thread::sleep((due - now).min(STOP_POLL));
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/scheduler.rs"]
mod tests;
