//! Keyboard-Shortcuts für die Zeichenfläche.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// - `M`: Audio an/aus
/// - `Ctrl+,`: Optionen öffnen
/// - `Ctrl+Q`: Beenden
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_m, key_comma, key_q) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::M),
            i.key_pressed(egui::Key::Comma),
            i.key_pressed(egui::Key::Q),
        )
    });

    if key_m && !modifiers.command {
        events.push(AppIntent::AudioToggleRequested);
    }

    if modifiers.command && key_comma {
        events.push(AppIntent::OpenOptionsDialogRequested);
    }

    if modifiers.command && key_q {
        events.push(AppIntent::ExitRequested);
    }

    events
}
