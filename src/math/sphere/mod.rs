// src/math/sphere/mod.rs

// Untermodule für Kugel-spezifische Funktionalität
pub mod coordinates;
pub mod hemisphere;
pub mod projection;
pub mod sampling;

pub use self::coordinates::{SphericalCoordinates, to_cartesian, to_spherical};
pub use self::hemisphere::HemisphereConstraint;
pub use self::projection::{PinholeCamera, ScreenPoint};
pub use self::sampling::{Polyline, split_visible, wireframe_polylines};
