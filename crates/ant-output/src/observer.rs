//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ant_core::{SimConfig, Tick};
use ant_nav::Navigator;
use ant_sim::{SimObserver, SimSnapshot};

use crate::row::{ForagerSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes forager snapshots and interval summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f32,
    /// Zone events accumulated since the last summary row.
    events_since:       u64,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            events_since:       0,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_secs(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.tick_duration_secs as f64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, events: usize) {
        self.events_since += events as u64;
    }

    fn on_snapshot(&mut self, tick: Tick, snap: &SimSnapshot<'_>) {
        let rows: Vec<ForagerSnapshotRow> = snap
            .foragers
            .iter()
            .map(|f| {
                let pos = snap.nav.position(f.id());
                ForagerSnapshotRow {
                    ant_id:   f.id().0,
                    tick:     tick.0,
                    x:        pos.x,
                    y:        pos.y,
                    carrying: f.is_carrying(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let carrying = snap.foragers.iter().filter(|f| f.is_carrying()).count() as u64;
        let summary = TickSummaryRow {
            tick:           tick.0,
            elapsed_secs:   self.elapsed_secs(tick),
            zone_events:    std::mem::take(&mut self.events_since),
            carrying,
            home_mass:      snap.home.total_mass(),
            food_mass:      snap.food.total_mass(),
            active_sources: snap.active_sources as u64,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
