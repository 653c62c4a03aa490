//! Taktquelle: rechnet Frame-Zeitpunkte in fällige Driver-Ticks um.

use crate::shared::TickMode;
use std::time::{Duration, Instant};

/// Zählt fällige Ticks seit dem letzten Frame.
///
/// Im Modus `Interval` wird der Rest-Zeitanteil mitgeführt, sodass die
/// Tick-Rate unabhängig von der Frame-Rate bleibt.
#[derive(Debug, Clone)]
pub struct TickClock {
    mode: TickMode,
    interval: Duration,
    max_per_frame: u32,
    last: Option<Instant>,
    backlog: Duration,
}

impl TickClock {
    pub fn new(mode: TickMode, interval: Duration, max_per_frame: u32) -> Self {
        Self {
            mode,
            interval: interval.max(Duration::from_micros(1)),
            max_per_frame: max_per_frame.max(1),
            last: None,
            backlog: Duration::ZERO,
        }
    }

    /// Übernimmt neue Einstellungen; der Rückstand wird verworfen.
    pub fn reconfigure(&mut self, mode: TickMode, interval: Duration, max_per_frame: u32) {
        *self = Self {
            last: self.last,
            ..Self::new(mode, interval, max_per_frame)
        };
    }

    /// Vergisst den letzten Frame; der nächste Aufruf zählt wieder als erster Frame.
    pub fn reset(&mut self) {
        self.last = None;
        self.backlog = Duration::ZERO;
    }

    pub fn mode(&self) -> TickMode {
        self.mode
    }

    /// Anzahl der bis `now` fälligen Ticks.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        match self.mode {
            TickMode::PerFrame => {
                self.last = Some(now);
                1
            }
            TickMode::Interval => {
                let Some(last) = self.last.replace(now) else {
                    // Erster Frame startet die Uhr und tickt einmal
                    return 1;
                };
                self.backlog += now.saturating_duration_since(last);

                let due = (self.backlog.as_nanos() / self.interval.as_nanos()) as u64;
                let capped = due.min(self.max_per_frame as u64) as u32;
                if due > capped as u64 {
                    log::debug!("Tick-Rückstand {} auf {} begrenzt", due, capped);
                    self.backlog = Duration::ZERO;
                } else {
                    self.backlog -= self.interval * capped;
                }
                capped
            }
        }
    }

    /// Ticks pro Sekunde im Modus `Interval`.
    pub fn nominal_rate(&self) -> f32 {
        1.0 / self.interval.as_secs_f32()
    }
}
