//! Use-Cases der Application-Layer-Orchestrierung.

pub mod apply_gesture;

pub use apply_gesture::{apply_rendered_gesture, resample_frames};
