//! Curves: Marker gleiten entlang kubischer Bézier-Kurven hin und her.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod audio;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AnimationDriver, AppCommand, AppController, AppIntent, AppState, TickReport, ViewState,
};
pub use audio::AudioCue;
pub use core::{ControlPoints, CubicBezier, CurveColor, Direction, MarkerId, Slider};
pub use shared::{BoundaryCue, CurveOptions, MarkerSink, RenderScene, SilentCue, TickMode};
