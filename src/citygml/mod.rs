//! Reading city objects and their polygons out of CityGML documents.

mod extract;

use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{InputError, Result};
use crate::geometry::Polygon;

pub use extract::{parse_coordinates, polygons_of};

/// GML namespace used for geometry elements in every supported CityGML version.
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// CityGML namespaces, in the order they are probed.
pub const CITYGML_NAMESPACES: [&str; 3] = [
    "http://www.opengis.net/citygml/2.0",
    "http://www.opengis.net/citygml/1.0",
    "http://www.citygml.org/citygml/1/0/0",
];

/// A top-level city object such as a building or a railway.
#[derive(Debug, Clone, PartialEq)]
pub struct CityObject {
    /// Local element name, e.g. `Building`.
    pub type_name: String,
    /// Value of the `gml:id` attribute, if any.
    pub id: Option<String>,
    /// Every polygon found below the object.
    pub polygons: Vec<Polygon>,
}

/// A parsed CityGML document.
#[derive(Debug, Clone)]
pub struct CityGml {
    path: PathBuf,
    namespace: &'static str,
    objects: Vec<CityObject>,
}

impl CityGml {
    /// Opens and parses a CityGML file.
    ///
    /// A directory `D` is accepted in place of a file and resolves to
    /// `D/<name of D>.xml`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the path cannot be resolved or read, the
    /// XML is malformed, no CityGML namespace yields city objects, or a
    /// coordinate list is invalid.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = resolve_path(path.as_ref())?;
        let text = std::fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;
        let mut document = Self::parse(&text)?;
        document.path = path;
        Ok(document)
    }

    /// Parses CityGML from an in-memory string.
    ///
    /// # Errors
    ///
    /// See [`CityGml::open`].
    pub fn parse(text: &str) -> Result<Self> {
        let doc = Document::parse(text).map_err(InputError::from)?;

        let Some((namespace, members)) = CITYGML_NAMESPACES.iter().find_map(|&ns| {
            let members: Vec<Node> = doc
                .descendants()
                .filter(|n| n.has_tag_name((ns, "cityObjectMember")))
                .collect();
            debug!(namespace = ns, members = members.len(), "probing CityGML namespace");
            (!members.is_empty()).then_some((ns, members))
        }) else {
            return Err(InputError::NoCityObjects.into());
        };

        let mut objects = Vec::new();
        for member in members {
            for node in member.children().filter(Node::is_element) {
                objects.push(CityObject {
                    type_name: node.tag_name().name().to_owned(),
                    id: node.attribute((GML_NAMESPACE, "id")).map(str::to_owned),
                    polygons: polygons_of(node)?,
                });
            }
        }

        Ok(Self {
            path: PathBuf::new(),
            namespace,
            objects,
        })
    }

    /// Path of the file that was read; empty for documents parsed from a string.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The CityGML namespace the document was recognized with.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// All city objects, in document order.
    #[must_use]
    pub fn city_objects(&self) -> &[CityObject] {
        &self.objects
    }

    /// City objects whose element name is one of `types`; all of them if
    /// `types` is empty.
    #[must_use]
    pub fn objects_of_types<S: AsRef<str>>(&self, types: &[S]) -> Vec<&CityObject> {
        self.objects
            .iter()
            .filter(|obj| types.is_empty() || types.iter().any(|t| t.as_ref() == obj.type_name))
            .collect()
    }
}

/// Maps an input argument to the XML file to read.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let mut inside = path.to_path_buf();
    if let Some(name) = path.file_name() {
        let mut file_name = name.to_os_string();
        file_name.push(".xml");
        inside.push(file_name);
    }
    if inside.is_file() {
        Ok(inside)
    } else {
        Err(InputError::NotFound(inside).into())
    }
}
