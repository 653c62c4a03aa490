//! Audio-Ausgabe für den Umkehrpunkt-Klick über cpal.
//!
//! Der UI-Thread sendet nur Trigger über einen Kanal; gemischt wird im
//! Callback-Thread des Audio-Backends. Fehlt ein Ausgabegerät, läuft die
//! Animation mit [`SilentCue`] weiter.

mod mixer;
mod sample;

pub use mixer::{send_trigger, trigger_channel, SharedVolume, VoiceMixer, MAX_VOICES};
pub use sample::{cue_sample, downmix, load_wav, resample_linear, synth_click};

use crate::shared::{BoundaryCue, CurveOptions, SilentCue};
use anyhow::{anyhow, bail, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use crossbeam_channel::Sender;
use std::sync::Arc;

/// Spielt bei jedem `play()` eine unabhängige Klick-Stimme ab.
pub struct ClickCue {
    triggers: Sender<()>,
    volume: SharedVolume,
    // Stream muss leben, solange Klicks abgespielt werden sollen
    _stream: cpal::Stream,
}

impl ClickCue {
    /// Öffnet das Standard-Ausgabegerät und startet den Stream.
    pub fn open(options: &CurveOptions) -> anyhow::Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("Kein Audio-Ausgabegerät gefunden"))?;
        let supported = device
            .default_output_config()
            .context("Keine Standard-Ausgabekonfiguration")?;
        let sample_rate = supported.sample_rate().0;

        let sample = cue_sample(options.cue_sample_path.as_deref(), sample_rate);

        let (tx, rx) = trigger_channel();
        let volume = SharedVolume::new(options.audio_volume);
        let mixer = VoiceMixer::new(Arc::from(sample), rx, volume.clone());

        let format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();
        let stream = match format {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, mixer)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, mixer)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, mixer)?,
            other => bail!("Nicht unterstütztes Sample-Format: {:?}", other),
        };
        stream.play().context("Audio-Stream konnte nicht gestartet werden")?;

        log::info!(
            "Audio-Ausgabe geöffnet: {} ({} Hz, {} Kanäle)",
            device.name().unwrap_or_else(|_| "unbekannt".to_string()),
            sample_rate,
            config.channels
        );

        Ok(Self {
            triggers: tx,
            volume,
            _stream: stream,
        })
    }
}

impl BoundaryCue for ClickCue {
    fn play(&mut self) {
        // Volle Warteschlange oder beendeter Callback: Klick entfällt, Ticks laufen weiter
        send_trigger(&self.triggers);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume.set(volume);
    }
}

/// Audio-Cue des Hosts: echter Klick oder stumm, falls kein Gerät verfügbar.
pub enum AudioCue {
    Click(ClickCue),
    Silent(SilentCue),
}

impl AudioCue {
    /// Versucht den Klick zu öffnen; bei Fehler stummer Fallback mit Warnung.
    pub fn open_or_silent(options: &CurveOptions) -> Self {
        match ClickCue::open(options) {
            Ok(cue) => AudioCue::Click(cue),
            Err(e) => {
                log::warn!("Audio nicht verfügbar, Klicks bleiben stumm: {:#}", e);
                AudioCue::Silent(SilentCue)
            }
        }
    }
}

impl Default for AudioCue {
    fn default() -> Self {
        AudioCue::Silent(SilentCue)
    }
}

impl BoundaryCue for AudioCue {
    fn play(&mut self) {
        match self {
            AudioCue::Click(cue) => cue.play(),
            AudioCue::Silent(cue) => cue.play(),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let AudioCue::Click(cue) = self {
            cue.set_volume(volume);
        }
    }

    fn is_silent(&self) -> bool {
        matches!(self, AudioCue::Silent(_))
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut mixer: VoiceMixer,
) -> anyhow::Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            mixer.begin_block();
            for frame in data.chunks_mut(channels) {
                let value = T::from_sample(mixer.next_sample());
                for out in frame.iter_mut() {
                    *out = value;
                }
            }
        },
        |err| log::error!("Audio-Stream-Fehler: {}", err),
        None,
    )?;
    Ok(stream)
}
