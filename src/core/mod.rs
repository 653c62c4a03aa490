//! Core-Domänentypen: Bézier-Kurve, Slider-Zustand, Kurvenfarbe.

pub mod color;
/// Kurvenmodell
///
/// Eine kubische Bézier-Kurve aus genau vier Punkten mit reiner,
/// überall definierter Auswertung.
pub mod curve;
pub mod slider;

pub use color::CurveColor;
pub use curve::{ControlPoints, CubicBezier};
pub use slider::{Direction, MarkerId, Slider};
