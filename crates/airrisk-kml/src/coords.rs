use airrisk_geo::Ring;

/// Flattens a ring into KML `lon,lat,0` triplets separated by spaces.
///
/// Any altitude in the source is replaced by 0. Positions with fewer than two
/// ordinates are skipped.
#[must_use]
pub fn ring_coordinates(ring: &Ring) -> String {
    ring.iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some(format!("{lon},{lat},0")),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
