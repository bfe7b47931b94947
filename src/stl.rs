//! ASCII STL output.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};
use crate::tessellation::Triangle3;

/// Solid name used when none is configured.
pub const DEFAULT_SOLID_NAME: &str = "citygml2stl";

/// Streams triangles into an ASCII STL document.
///
/// The `solid` header is written on creation and the `endsolid` footer by
/// [`StlWriter::finish`]. Facet normals are always written as `0 0 0`.
pub struct StlWriter<W: Write> {
    inner: W,
    name: String,
    facets: usize,
}

impl<W: Write> StlWriter<W> {
    /// Starts a new solid named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the header cannot be written.
    pub fn new(mut inner: W, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        writeln!(inner, "solid {name}").map_err(OutputError::from)?;
        Ok(Self {
            inner,
            name,
            facets: 0,
        })
    }

    /// Appends one facet per triangle.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] on a write failure.
    pub fn write_triangles<'t>(
        &mut self,
        triangles: impl IntoIterator<Item = &'t Triangle3>,
    ) -> Result<()> {
        for tri in triangles {
            self.write_facet(tri).map_err(OutputError::from)?;
            self.facets += 1;
        }
        Ok(())
    }

    fn write_facet(&mut self, tri: &Triangle3) -> std::io::Result<()> {
        let out = &mut self.inner;
        writeln!(out, "  facet normal 0 0 0")?;
        writeln!(out, "    outer loop")?;
        for v in tri {
            writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")
    }

    /// Number of facets written so far.
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets
    }

    /// Writes the footer, flushes, and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the footer cannot be written or flushed.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.inner, "endsolid {}", self.name).map_err(OutputError::from)?;
        self.inner.flush().map_err(OutputError::from)?;
        Ok(self.inner)
    }
}

/// Derives the STL path for an input path.
///
/// A trailing `.xml` or `.gml` becomes `.stl`; any other path gets `.stl`
/// appended.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    if let Some(s) = input.to_str() {
        if let Some(stem) = s.strip_suffix(".xml").or_else(|| s.strip_suffix(".gml")) {
            return PathBuf::from(format!("{stem}.stl"));
        }
    }
    let mut out = OsString::from(input.as_os_str());
    out.push(".stl");
    PathBuf::from(out)
}
