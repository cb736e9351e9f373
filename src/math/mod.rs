pub mod error;
pub mod sphere;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{NavigatorError, NavigatorResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{NavigatorError, NavigatorResult},
        sphere::{coordinates::*, hemisphere::*, projection::*, sampling::*},
        utils::{angles, constants},
    };
}
