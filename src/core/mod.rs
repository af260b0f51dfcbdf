//! Core-Domänentypen: Geometrie, Pfade, virtuelle Oberfläche, Session.

pub mod geometry;
pub mod path;
pub mod session;
pub mod surface;

pub use geometry::Rect;
pub use path::{cubic_bezier, quadratic_bezier, GeomPath, PathSegment};
pub use session::{Receiver, Session, Timeline, Trajectory, Transmitter};
pub use surface::{VirtualSurface, ViewportSurface};
