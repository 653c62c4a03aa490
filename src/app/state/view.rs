/// View-bezogener Anwendungszustand
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
        }
    }

    /// True, sobald der Host eine Größe gemeldet hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size[0] > 0.0 && self.viewport_size[1] > 0.0
    }
}
