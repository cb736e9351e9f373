// src/math/sphere/hemisphere.rs

use bevy::math::DVec3;
use std::fmt;

/// Toleranz, damit der begrenzende Großkreis zu beiden angrenzenden Hemisphären gehört.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Halbraum-Einschränkung für den navigierten Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HemisphereConstraint {
    #[default]
    Unconstrained,
    PlusX,
    MinusX,
    PlusY,
    MinusY,
    PlusZ,
    MinusZ,
}

impl HemisphereConstraint {
    /// Alle Varianten in der Reihenfolge der Tastenbelegung 0..=6
    pub const ALL: [HemisphereConstraint; 7] = [
        HemisphereConstraint::Unconstrained,
        HemisphereConstraint::PlusX,
        HemisphereConstraint::MinusX,
        HemisphereConstraint::PlusY,
        HemisphereConstraint::MinusY,
        HemisphereConstraint::PlusZ,
        HemisphereConstraint::MinusZ,
    ];

    /// Prüft, ob `point` im erlaubten Halbraum liegt (Grenze inklusive).
    pub fn satisfies(self, point: DVec3) -> bool {
        match self {
            HemisphereConstraint::Unconstrained => true,
            HemisphereConstraint::PlusX => point.x >= -BOUNDARY_TOLERANCE,
            HemisphereConstraint::MinusX => point.x <= BOUNDARY_TOLERANCE,
            HemisphereConstraint::PlusY => point.y >= -BOUNDARY_TOLERANCE,
            HemisphereConstraint::MinusY => point.y <= BOUNDARY_TOLERANCE,
            HemisphereConstraint::PlusZ => point.z >= -BOUNDARY_TOLERANCE,
            HemisphereConstraint::MinusZ => point.z <= BOUNDARY_TOLERANCE,
        }
    }

    /// Zuordnung der Zifferntasten 0..=6
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(digit)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            HemisphereConstraint::Unconstrained => "None",
            HemisphereConstraint::PlusX => "+X",
            HemisphereConstraint::MinusX => "-X",
            HemisphereConstraint::PlusY => "+Y",
            HemisphereConstraint::MinusY => "-Y",
            HemisphereConstraint::PlusZ => "+Z",
            HemisphereConstraint::MinusZ => "-Z",
        }
    }
}

impl fmt::Display for HemisphereConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
