//! Klick-Sample: synthetisch erzeugt oder aus einer WAV-Datei geladen.

use anyhow::Context;
use std::path::Path;

/// Länge des synthetischen Klicks in Sekunden.
const CLICK_DURATION_S: f32 = 0.045;
/// Grundfrequenz des Klicks in Hz.
const CLICK_FREQUENCY_HZ: f32 = 1_600.0;
/// Abklingrate der Hüllkurve (1/s).
const CLICK_DECAY_PER_S: f32 = 110.0;

/// Erzeugt einen kurzen Metronom-Klick (gedämpfter Sinus) als Mono-Sample.
pub fn synth_click(sample_rate: u32) -> Vec<f32> {
    let rate = sample_rate.max(1) as f32;
    let len = (CLICK_DURATION_S * rate).ceil() as usize;
    (0..len)
        .map(|i| {
            let t = i as f32 / rate;
            let envelope = (-t * CLICK_DECAY_PER_S).exp();
            (std::f32::consts::TAU * CLICK_FREQUENCY_HZ * t).sin() * envelope
        })
        .collect()
}

/// Lädt eine WAV-Datei als Mono-Sample in der Ziel-Abtastrate.
pub fn load_wav(path: &Path, target_rate: u32) -> anyhow::Result<Vec<f32>> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("WAV-Datei nicht lesbar: {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .context("WAV-Samples (float) fehlerhaft")?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()
                .context("WAV-Samples (int) fehlerhaft")?
        }
    };

    let mono = downmix(&interleaved, spec.channels as usize);
    log::info!(
        "Cue-Sample geladen: {} ({} Hz, {} Kanäle, {} Frames)",
        path.display(),
        spec.sample_rate,
        spec.channels,
        mono.len()
    );
    Ok(resample_linear(&mono, spec.sample_rate, target_rate))
}

/// Cue-Sample für die Ausgabe: WAV aus `path` oder der synthetische Klick.
///
/// Ein nicht ladbares WAV wird protokolliert und durch den Klick ersetzt.
pub fn cue_sample(path: Option<&str>, sample_rate: u32) -> Vec<f32> {
    let Some(path) = path else {
        return synth_click(sample_rate);
    };
    match load_wav(Path::new(path), sample_rate) {
        Ok(sample) if !sample.is_empty() => sample,
        Ok(_) => {
            log::warn!("Cue-Sample {} ist leer, verwende Klick", path);
            synth_click(sample_rate)
        }
        Err(e) => {
            log::warn!("Cue-Sample nicht nutzbar, verwende Klick: {:#}", e);
            synth_click(sample_rate)
        }
    }
}

/// Mittelt interleavte Kanäle zu Mono.
pub fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    let channels = channels.max(1);
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Lineare Interpolation auf eine andere Abtastrate.
pub fn resample_linear(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() || from_rate == 0 || to_rate == 0 {
        return samples.to_vec();
    }
    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = ((samples.len() as f64) / ratio).round().max(1.0) as usize;
    let last = samples.len() - 1;

    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let idx = (pos.floor() as usize).min(last);
            let next = (idx + 1).min(last);
            let frac = (pos - idx as f64) as f32;
            samples[idx] + (samples[next] - samples[idx]) * frac
        })
        .collect()
}
