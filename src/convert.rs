//! Per-file conversion pipeline: CityGML in, STL out.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::citygml::CityGml;
use crate::error::{OutputError, Result};
use crate::stl::{output_path, StlWriter, DEFAULT_SOLID_NAME};
use crate::tessellation::{Triangle3, TriangulateObject};

/// Options controlling a conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Name written in the `solid` / `endsolid` lines.
    pub solid_name: String,
    /// City object types to export, e.g. `Building`. Empty exports everything.
    pub object_types: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            solid_name: DEFAULT_SOLID_NAME.to_owned(),
            object_types: Vec::new(),
        }
    }
}

impl ConvertOptions {
    /// Sets the STL solid name.
    #[must_use]
    pub fn with_solid_name(mut self, name: impl Into<String>) -> Self {
        self.solid_name = name.into();
        self
    }

    /// Restricts the export to the given city object types.
    #[must_use]
    pub fn with_object_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_types = types.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// The CityGML file that was actually read.
    pub input: PathBuf,
    /// Number of exported city objects.
    pub objects: usize,
    /// Number of facets written.
    pub triangles: usize,
}

/// Triangulates the selected city objects of a document.
///
/// # Errors
///
/// Propagates triangulation errors other than skipped polygons.
pub fn triangulate_document(
    doc: &CityGml,
    options: &ConvertOptions,
) -> Result<Vec<Vec<Triangle3>>> {
    doc.objects_of_types(options.object_types.as_slice())
        .into_iter()
        .map(|obj| TriangulateObject::new(obj).execute())
        .collect()
}

/// Converts one CityGML input into an ASCII STL file.
///
/// The output file is only created once the whole input has been read and
/// triangulated. If writing fails, the partial output is removed.
///
/// # Errors
///
/// Returns an input error if the document cannot be read or understood and an
/// output error if the STL file cannot be written.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let doc = CityGml::open(input)?;
    debug!(path = %doc.path().display(), namespace = doc.namespace(), "parsed CityGML");

    let per_object = triangulate_document(&doc, options)?;

    let written = write_stl(output, &options.solid_name, &per_object);
    let triangles = match written {
        Ok(count) => count,
        Err(e) => {
            let _ = fs::remove_file(output);
            return Err(e);
        }
    };

    let summary = ConversionSummary {
        input: doc.path().to_path_buf(),
        objects: per_object.len(),
        triangles,
    };
    info!(
        input = %summary.input.display(),
        output = %output.display(),
        objects = summary.objects,
        triangles = summary.triangles,
        "converted"
    );
    Ok(summary)
}

/// Converts every input to the STL path derived by [`output_path`].
///
/// A failing input is reported on stderr and does not stop the batch.
/// Returns the number of inputs that failed.
pub fn convert_all(inputs: &[PathBuf], options: &ConvertOptions) -> usize {
    let mut failures = 0;
    for input in inputs {
        let output = output_path(input);
        println!("Converting {} to {}", input.display(), output.display());
        if let Err(e) = convert_file(input, &output, options) {
            eprintln!("Error: {e}");
            failures += 1;
        }
    }
    failures
}

fn write_stl(output: &Path, solid_name: &str, per_object: &[Vec<Triangle3>]) -> Result<usize> {
    let file = File::create(output).map_err(|source| OutputError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = StlWriter::new(BufWriter::new(file), solid_name)?;
    for triangles in per_object {
        writer.write_triangles(triangles)?;
    }
    let count = writer.facet_count();
    writer.finish()?;
    Ok(count)
}
