//! Handler für Options-Dialog, Audio-Schalter und Programmende.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::CurveOptions;

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt Optionen und propagiert Validierungsfehler.
pub fn apply_options(state: &mut AppState, options: CurveOptions) -> anyhow::Result<()> {
    use_cases::options::apply(state, options)
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset(state)
}

/// Speichert die Optionen am konfigurierten Pfad.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = state.config_path.clone();
    use_cases::options::save(state, &path)
}

/// Schaltet den Umkehrpunkt-Klick.
pub fn set_audio_enabled(state: &mut AppState, enabled: bool) {
    use_cases::options::set_audio_enabled(state, enabled);
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
