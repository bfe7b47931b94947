use roxmltree::Node;

use crate::error::{InputError, Result};
use crate::geometry::Polygon;
use crate::math::Point3;

use super::GML_NAMESPACE;

/// Collects every `gml:Polygon` below `object`, in document order.
///
/// A polygon without an exterior ring gets an empty exterior, which later
/// fails plane fitting and is skipped.
///
/// # Errors
///
/// Returns [`InputError::Coordinates`] if a ring holds invalid coordinates.
pub fn polygons_of(object: Node<'_, '_>) -> Result<Vec<Polygon>> {
    object
        .descendants()
        .filter(|n| n.has_tag_name((GML_NAMESPACE, "Polygon")))
        .map(polygon_from_node)
        .collect()
}

fn polygon_from_node(polygon: Node<'_, '_>) -> Result<Polygon> {
    let exterior = match polygon
        .descendants()
        .find(|n| n.has_tag_name((GML_NAMESPACE, "exterior")))
    {
        Some(ring) => ring_points(ring)?,
        None => Vec::new(),
    };

    let interiors = polygon
        .descendants()
        .filter(|n| n.has_tag_name((GML_NAMESPACE, "interior")))
        .map(ring_points)
        .collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Points of a ring: `gml:posList` contents, or `gml:pos` contents if the
/// ring has no position list.
fn ring_points(ring: Node<'_, '_>) -> Result<Vec<Point3>> {
    let mut lists: Vec<Node> = ring
        .descendants()
        .filter(|n| n.has_tag_name((GML_NAMESPACE, "posList")))
        .collect();
    if lists.is_empty() {
        lists = ring
            .descendants()
            .filter(|n| n.has_tag_name((GML_NAMESPACE, "pos")))
            .collect();
    }

    let mut points = Vec::new();
    for node in lists {
        points.extend(parse_coordinates(node.text().unwrap_or_default())?);
    }
    Ok(points)
}

/// Parses whitespace-separated coordinates grouped in `x y z` triples.
///
/// # Errors
///
/// Returns [`InputError::Coordinates`] for a token that is not a finite number
/// or a token count that is not a multiple of three.
pub fn parse_coordinates(text: &str) -> Result<Vec<Point3>> {
    let values = text
        .split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(InputError::Coordinates(format!("not a number: {token:?}"))),
        })
        .collect::<std::result::Result<Vec<f64>, _>>()?;

    if values.len() % 3 != 0 {
        return Err(InputError::Coordinates(format!(
            "{} values do not form 3D points",
            values.len()
        ))
        .into());
    }

    Ok(values
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use roxmltree::Document;

    use super::*;

    fn polygons(xml: &str) -> Vec<Polygon> {
        let wrapped = format!(r#"<obj xmlns:gml="http://www.opengis.net/gml">{xml}</obj>"#);
        let doc = Document::parse(&wrapped).unwrap();
        polygons_of(doc.root_element()).unwrap()
    }

    #[test]
    fn parses_triples() {
        let points = parse_coordinates(" 1 2 3\n\t4.5 -6e2 7 ").unwrap();
        assert_eq!(points, vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.5, -600.0, 7.0)]);
    }

    #[test]
    fn empty_text_has_no_points() {
        assert!(parse_coordinates("  \n ").unwrap().is_empty());
    }

    #[test]
    fn incomplete_triple_rejected() {
        assert!(parse_coordinates("1 2 3 4 5").is_err());
    }

    #[test]
    fn non_numeric_token_rejected() {
        assert!(parse_coordinates("1 2 three").is_err());
        assert!(parse_coordinates("1 2 NaN").is_err());
    }

    #[test]
    fn exterior_and_interiors() {
        let found = polygons(
            r"<gml:Polygon>
                <gml:exterior><gml:LinearRing>
                  <gml:posList srsDimension='3'>0 0 0 10 0 0 10 10 0 0 10 0 0 0 0</gml:posList>
                </gml:LinearRing></gml:exterior>
                <gml:interior><gml:LinearRing>
                  <gml:posList>2 2 0 4 2 0 4 4 0 2 2 0</gml:posList>
                </gml:LinearRing></gml:interior>
                <gml:interior><gml:LinearRing>
                  <gml:posList>6 6 0 8 6 0 8 8 0 6 6 0</gml:posList>
                </gml:LinearRing></gml:interior>
              </gml:Polygon>",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].exterior.len(), 5);
        assert_eq!(found[0].interiors.len(), 2);
        assert_eq!(found[0].interiors[1][2], Point3::new(8.0, 8.0, 0.0));
    }

    #[test]
    fn pos_elements_used_without_pos_list() {
        let found = polygons(
            r"<gml:Polygon><gml:exterior><gml:LinearRing>
                <gml:pos>0 0 0</gml:pos><gml:pos>1 0 0</gml:pos><gml:pos>0 1 0</gml:pos>
              </gml:LinearRing></gml:exterior></gml:Polygon>",
        );
        assert_eq!(found[0].exterior.len(), 3);
    }

    #[test]
    fn missing_exterior_gives_empty_ring() {
        let found = polygons("<gml:Polygon/>");
        assert_eq!(found, vec![Polygon::default()]);
    }

    #[test]
    fn other_namespaces_ignored() {
        let found = polygons(
            r"<Polygon><exterior><posList>0 0 0 1 0 0 0 1 0</posList></exterior></Polygon>",
        );
        assert!(found.is_empty());
    }
}
