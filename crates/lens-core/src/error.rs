use std::fmt;

/// Which of the three optical distances an [`InputError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ObjectDistance,
    FocalLength,
    ScreenDistance,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::ObjectDistance, Field::ScreenDistance, Field::FocalLength];

    /// Stable identifier used for DOM ids and CLI messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ObjectDistance => "object-distance",
            Field::FocalLength => "focal-length",
            Field::ScreenDistance => "screen-distance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::ObjectDistance => "object distance",
            Field::FocalLength => "focal length",
            Field::ScreenDistance => "screen distance",
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: Field },
    #[error("{field} must be positive, got {value} cm")]
    NonPositive { field: Field, value: f64 },
}
