use crate::geometry::Geometry;

/// Concatenates areal geometries into one `MultiPolygon`, in input order.
///
/// A `Polygon` contributes itself as one member, a `MultiPolygon` contributes
/// each of its members. Nothing is unioned or simplified. Returns `None` when
/// no polygon was collected.
#[must_use]
pub fn merge_geometries<'a, I>(geometries: I) -> Option<Geometry>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let mut polygons = Vec::new();
    for geometry in geometries {
        match geometry {
            Geometry::Polygon { coordinates } => polygons.push(coordinates.clone()),
            Geometry::MultiPolygon { coordinates } => polygons.extend(coordinates.iter().cloned()),
            Geometry::Unsupported => {}
        }
    }

    if polygons.is_empty() {
        None
    } else {
        Some(Geometry::MultiPolygon {
            coordinates: polygons,
        })
    }
}
