use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a coordinate string is not of the form `group:name:version`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid artifact coordinate (expected group:name:version) - {coordinate}")]
pub struct InvalidCoordinate {
    pub coordinate: String,
}

/// A `group:name:version` artifact coordinate.
///
/// Identifies the single, non-transitively resolved bundle that carries the
/// nested build workspace template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ArtifactCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl FromStr for ArtifactCoordinate {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(InvalidCoordinate {
                coordinate: s.to_string(),
            });
        };
        if group.is_empty() || name.is_empty() || version.is_empty() {
            return Err(InvalidCoordinate {
                coordinate: s.to_string(),
            });
        }
        Ok(Self::new(*group, *name, *version))
    }
}

impl Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
