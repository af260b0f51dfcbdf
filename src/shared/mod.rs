//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app` und `ui` geteilt werden.

pub mod options;

pub use options::SurfaceOptions;
pub use options::{CTRL_POINT_SIZE_PX, REPAINT_PADDING_PX, SNAP_RADIUS};
