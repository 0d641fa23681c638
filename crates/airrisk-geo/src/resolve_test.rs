use super::*;
use crate::geometry::Ring;

fn square(origin: f64) -> Vec<Ring> {
    vec![vec![
        vec![origin, origin],
        vec![origin + 1.0, origin],
        vec![origin + 1.0, origin + 1.0],
        vec![origin, origin],
    ]]
}

fn feature(iso3: Option<&str>, name: &str, origin: f64) -> BoundaryFeature {
    BoundaryFeature {
        iso3: iso3.map(str::to_string),
        name: Some(name.to_string()),
        geometry: Some(Geometry::Polygon {
            coordinates: square(origin),
        }),
    }
}

fn sample_index() -> BoundaryIndex {
    BoundaryIndex::from_features([
        feature(Some("FRA"), "France", 1.0),
        feature(Some("GTM"), "Guatemala", 10.0),
        feature(Some("HND"), "Honduras", 20.0),
        feature(Some("PAN"), "Panama", 30.0),
        // A single-feature decoy sharing the region's name.
        feature(Some("XCA"), "Central America", 99.0),
        feature(None, "Atlantis", 40.0),
        feature(Some("ZZZ"), "Zed", 50.0),
        BoundaryFeature {
            iso3: Some("IRN".to_string()),
            name: Some("Iran".to_string()),
            geometry: Some(Geometry::Unsupported),
        },
    ])
}

fn record(key: &str, listing_name: Option<&str>) -> AdvisoryRecord {
    let mut record = AdvisoryRecord::new(key);
    record.listing_name = listing_name.map(str::to_string);
    record
}

#[test]
fn iso3_table_resolves_country() {
    let index = sample_index();
    let resolution = Resolver::new(&index).resolve("France", "France").unwrap();
    assert_eq!(resolution.iso3.as_deref(), Some("FRA"));
    assert_eq!(
        resolution.geometry,
        Geometry::Polygon {
            coordinates: square(1.0)
        }
    );
}

#[test]
fn region_alias_takes_precedence_and_merges_present_members() {
    let index = sample_index();
    let resolution = Resolver::new(&index)
        .resolve("CentralAmerica", "Central America")
        .unwrap();

    assert!(resolution.iso3.is_none());
    // Members in alias order (GTM, BLZ, HND, SLV, NIC, CRI, PAN), absent ones skipped.
    assert_eq!(
        resolution.geometry,
        Geometry::MultiPolygon {
            coordinates: vec![square(10.0), square(20.0), square(30.0)],
        }
    );
}

#[test]
fn region_alias_matches_display_name_when_key_does_not() {
    let index = sample_index();
    let resolution = Resolver::new(&index)
        .resolve("CentAm", "Central America")
        .unwrap();
    assert_eq!(resolution.geometry.polygon_count(), 3);
}

#[test]
fn region_without_resolvable_members_is_unresolved() {
    let index = BoundaryIndex::from_features([feature(Some("XCB"), "Caribbean", 7.0)]);
    let resolver = Resolver::new(&index);

    assert!(resolver.resolve("Caribbean", "Caribbean").is_none());

    let outcome = resolver.resolve_all([record("Caribbean", None)]);
    assert!(outcome.resolved.is_empty());
    assert_eq!(outcome.unmapped, vec!["Caribbean"]);
}

#[test]
fn region_alias_beats_feature_of_the_same_name() {
    let index = BoundaryIndex::from_features([
        // Matches both the display-name and raw-key lookups.
        feature(Some("XCB"), "Caribbean", 7.0),
        feature(Some("JAM"), "Jamaica", 60.0),
        feature(Some("CUB"), "Cuba", 70.0),
    ]);

    let resolution = Resolver::new(&index)
        .resolve("Caribbean", "Caribbean")
        .unwrap();

    assert!(resolution.iso3.is_none());
    // Alias order is CUB before JAM.
    assert_eq!(
        resolution.geometry,
        Geometry::MultiPolygon {
            coordinates: vec![square(70.0), square(60.0)],
        }
    );
}

#[test]
fn display_name_lookup_used_when_table_misses() {
    let index = sample_index();
    let resolution = Resolver::new(&index).resolve("Atl", "Atlantis").unwrap();
    assert!(resolution.iso3.is_none());
    assert_eq!(
        resolution.geometry,
        Geometry::Polygon {
            coordinates: square(40.0)
        }
    );
}

#[test]
fn raw_key_lookup_is_last_resort() {
    let index = sample_index();
    let resolution = Resolver::new(&index).resolve("ZZZ", "Zedland").unwrap();
    assert_eq!(resolution.iso3.as_deref(), Some("ZZZ"));
}

#[test]
fn non_areal_feature_does_not_resolve() {
    let index = sample_index();
    assert!(Resolver::new(&index).resolve("Iran", "Iran").is_none());
}

#[test]
fn resolution_is_deterministic() {
    let index = sample_index();
    let resolver = Resolver::new(&index);
    let first = resolver.resolve("CentralAmerica", "Central America");
    let second = resolver.resolve("CentralAmerica", "Central America");
    assert_eq!(first, second);
}

#[test]
fn resolve_all_keeps_order_and_collects_unmapped() {
    let index = sample_index();
    let outcome = Resolver::new(&index).resolve_all([
        record("Atlantis", None),
        record("Narnia", Some("Narnia")),
        record("France", Some("France")),
        record("Iran", Some("Iran")),
    ]);

    let keys: Vec<&str> = outcome
        .resolved
        .iter()
        .map(|r| r.record.key.as_str())
        .collect();
    assert_eq!(keys, vec!["Atlantis", "France"]);
    assert_eq!(outcome.unmapped, vec!["Narnia", "Iran"]);
}

#[test]
fn unmapped_uses_display_name_override() {
    let index = BoundaryIndex::default();
    let outcome = Resolver::new(&index).resolve_all([record("SouthSudan", None)]);
    assert!(outcome.resolved.is_empty());
    assert_eq!(outcome.unmapped, vec!["South Sudan"]);
}
