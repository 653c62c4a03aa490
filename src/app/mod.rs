//! Application-Layer: Controller, State, Events, Animation-Driver und Use-Cases.

pub mod animation;
pub mod controller;
pub mod demo;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod pending;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Slider, Zeichenfläche, Optionen).
pub mod state;
pub mod tick_clock;
pub mod use_cases;

pub use animation::{AnimationDriver, TickReport};
pub use controller::AppController;
pub use demo::{demo_layout, DemoCurve, DemoScript};
pub use events::{AppCommand, AppIntent};
pub use pending::PendingCurve;
pub use render_scene::build as build_render_scene;
pub use state::{AnimationStats, AppState, ViewState};
pub use tick_clock::TickClock;
