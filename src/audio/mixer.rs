//! Voice-Mixer im Audio-Callback: jeder Trigger startet eine eigene Stimme.

use atomic_float::AtomicF32;
use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Obergrenze gleichzeitiger Stimmen; weitere Trigger werden verworfen.
pub const MAX_VOICES: usize = 64;

/// Begrenzter Trigger-Kanal UI-Thread → Audio-Callback.
///
/// Die Kapazität entspricht `MAX_VOICES`: steht der Callback still, wächst
/// die Warteschlange nicht weiter.
pub fn trigger_channel() -> (Sender<()>, Receiver<()>) {
    crossbeam_channel::bounded(MAX_VOICES)
}

/// Sendet einen Trigger ohne zu blockieren. Gibt `false` zurück, wenn er verworfen wurde.
pub fn send_trigger(triggers: &Sender<()>) -> bool {
    match triggers.try_send(()) {
        Ok(()) => true,
        Err(TrySendError::Full(())) => {
            log::trace!("Trigger-Warteschlange voll, Klick verworfen");
            false
        }
        Err(TrySendError::Disconnected(())) => false,
    }
}

/// Lautstärke als atomarer f32, vom UI-Thread setzbar.
#[derive(Debug, Clone)]
pub struct SharedVolume(Arc<AtomicF32>);

impl SharedVolume {
    pub fn new(volume: f32) -> Self {
        Self(Arc::new(AtomicF32::new(volume.clamp(0.0, 1.0))))
    }

    pub fn set(&self, volume: f32) {
        self.0.store(volume.clamp(0.0, 1.0), Ordering::Release);
    }

    pub fn get(&self) -> f32 {
        self.0.load(Ordering::Acquire)
    }
}

/// Mischt überlappende Abspielungen desselben Samples.
pub struct VoiceMixer {
    sample: Arc<[f32]>,
    triggers: Receiver<()>,
    cursors: Vec<usize>,
    volume: SharedVolume,
}

impl VoiceMixer {
    pub fn new(sample: Arc<[f32]>, triggers: Receiver<()>, volume: SharedVolume) -> Self {
        Self {
            sample,
            triggers,
            cursors: Vec::with_capacity(MAX_VOICES),
            volume,
        }
    }

    /// Übernimmt alle seit dem letzten Block eingegangenen Trigger.
    pub fn begin_block(&mut self) {
        loop {
            match self.triggers.try_recv() {
                Ok(()) => {
                    if self.cursors.len() < MAX_VOICES {
                        self.cursors.push(0);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Nächster Mono-Sample-Wert aller aktiven Stimmen.
    pub fn next_sample(&mut self) -> f32 {
        if self.cursors.is_empty() {
            return 0.0;
        }
        let sample = &self.sample;
        let mut mix = 0.0;
        self.cursors.retain_mut(|cursor| {
            let Some(value) = sample.get(*cursor) else {
                return false;
            };
            mix += value;
            *cursor += 1;
            true
        });
        (mix * self.volume.get()).clamp(-1.0, 1.0)
    }

    pub fn active_voices(&self) -> usize {
        self.cursors.len()
    }
}
