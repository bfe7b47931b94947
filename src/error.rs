use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for CityGML to STL conversion.
#[derive(Debug, Error)]
pub enum Citygml2StlError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl Citygml2StlError {
    /// Returns `true` if the error means a ring did not determine a plane.
    ///
    /// Such failures are recoverable per polygon.
    #[must_use]
    pub fn is_plane_construction(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::PlaneConstruction(_)))
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot construct plane: {0}")]
    PlaneConstruction(String),

    #[error("invalid ring: {0}")]
    InvalidRing(String),
}

/// Errors raised while locating, reading or interpreting a CityGML input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("no city objects found")]
    NoCityObjects,

    #[error("invalid coordinates: {0}")]
    Coordinates(String),
}

/// Errors raised while writing an STL mesh.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`Citygml2StlError`].
pub type Result<T> = std::result::Result<T, Citygml2StlError>;
