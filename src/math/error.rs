// src/math/error.rs
use thiserror::Error;

/// Fehler bei der Validierung der Navigator-Konfiguration.
///
/// Die Navigations- und Projektionsfunktionen selbst sind total und liefern nie einen Fehler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigatorError {
    #[error("Camera distance {camera_distance} must exceed sphere radius {radius}")]
    CameraInsideSphere { camera_distance: f64, radius: f64 },

    #[error("Invalid configuration: {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Invalid configuration: {field} must be at least {min}, got {actual}")]
    TooFewSamples {
        field: &'static str,
        min: usize,
        actual: usize,
    },
}

pub type NavigatorResult<T> = Result<T, NavigatorError>;
