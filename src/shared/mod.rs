//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `audio` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod capabilities;
pub mod options;
mod render_scene;
mod scene;

pub use capabilities::{BoundaryCue, MarkerSink, SilentCue};
pub use options::{CurveOptions, TickMode};
pub use options::{CURVE_ALPHA, DEFAULT_STEP, DOT_ALPHA};
pub use render_scene::RenderScene;
pub use scene::{CanvasLayer, CurveStroke, Dot, Marker, MarkerLayer};
