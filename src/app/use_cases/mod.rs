//! Use-Cases der Application-Layer-Orchestrierung.

pub mod animation;
pub mod curves;
pub mod options;
pub mod viewport;
