//! Advisory-to-geometry resolution.
//!
//! The feed, the boundary dataset, and ISO 3166 all name countries
//! differently. Resolution walks an ordered chain of strategies and takes the
//! first one that yields an areal geometry:
//!
//! 1. region alias (key, then display name): merged constituents, no ISO3
//! 2. name-to-ISO3 table (key, then display name), then the index by code
//! 3. the index by display name
//! 4. the index by raw key
//!
//! A region alias match ends the chain whether or not any constituent is in
//! the index, so a region never resolves to a single-country feature.
//!
//! Every strategy is a pure function of the query, the static tables in
//! [`airrisk_core::tables`], and the boundary index.

use airrisk_core::{tables, AdvisoryRecord};

use crate::boundary::{BoundaryFeature, BoundaryIndex};
use crate::geometry::Geometry;
use crate::merge::merge_geometries;

/// Geometry found for one advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryResolution {
    pub geometry: Geometry,
    /// `None` for region composites and for features without a usable code.
    pub iso3: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAdvisory {
    pub record: AdvisoryRecord,
    pub resolution: GeometryResolution,
}

/// Result of resolving a batch of advisories.
#[derive(Debug, Default)]
pub struct ResolveOutcome {
    /// Resolved advisories, in input order.
    pub resolved: Vec<ResolvedAdvisory>,
    /// Display names of advisories no strategy could place on the map.
    pub unmapped: Vec<String>,
}

struct Query<'q> {
    key: &'q str,
    display_name: &'q str,
}

/// What one strategy concluded about a query.
enum Step {
    Resolved(GeometryResolution),
    /// The strategy claimed the query but produced no geometry.
    Unresolved,
    Continue,
}

impl From<Option<GeometryResolution>> for Step {
    fn from(resolution: Option<GeometryResolution>) -> Self {
        resolution.map_or(Step::Continue, Step::Resolved)
    }
}

type Strategy = fn(&Query<'_>, &BoundaryIndex) -> Step;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("region_alias", by_region_alias),
    ("iso3_table", by_iso3_table),
    ("display_name", by_display_name),
    ("raw_key", by_raw_key),
];

/// Resolves advisories against a loaded [`BoundaryIndex`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a BoundaryIndex,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(index: &'a BoundaryIndex) -> Self {
        Self { index }
    }

    /// Runs the strategy chain for one advisory key and display name.
    #[must_use]
    pub fn resolve(&self, key: &str, display_name: &str) -> Option<GeometryResolution> {
        let query = Query { key, display_name };
        for (name, strategy) in STRATEGIES {
            match strategy(&query, self.index) {
                Step::Resolved(resolution) => {
                    tracing::trace!(key, display_name, strategy = *name, "resolved geometry");
                    return Some(resolution);
                }
                Step::Unresolved => {
                    tracing::trace!(key, display_name, strategy = *name, "matched without geometry");
                    return None;
                }
                Step::Continue => {}
            }
        }
        None
    }

    /// Resolves every record, keeping input order.
    ///
    /// Unresolved records are dropped and their display names collected in
    /// [`ResolveOutcome::unmapped`].
    pub fn resolve_all(&self, records: impl IntoIterator<Item = AdvisoryRecord>) -> ResolveOutcome {
        let mut outcome = ResolveOutcome::default();
        for record in records {
            let display_name = record.display_name().into_owned();
            match self.resolve(&record.key, &display_name) {
                Some(resolution) => outcome.resolved.push(ResolvedAdvisory { record, resolution }),
                None => {
                    tracing::debug!(key = %record.key, display_name, "no geometry for advisory");
                    outcome.unmapped.push(display_name);
                }
            }
        }
        outcome
    }
}

fn by_region_alias(query: &Query<'_>, index: &BoundaryIndex) -> Step {
    let Some(members) = tables::region_members(query.key)
        .or_else(|| tables::region_members(query.display_name))
    else {
        return Step::Continue;
    };

    let mut missing = Vec::new();
    let geometries: Vec<&Geometry> = members
        .iter()
        .filter_map(|code| {
            let geometry = index.by_iso3(code).and_then(BoundaryFeature::areal_geometry);
            if geometry.is_none() {
                missing.push(*code);
            }
            geometry
        })
        .collect();

    if !missing.is_empty() {
        tracing::debug!(
            region = query.display_name,
            missing = ?missing,
            "region constituents absent from boundary dataset"
        );
    }

    match merge_geometries(geometries) {
        Some(geometry) => Step::Resolved(GeometryResolution {
            geometry,
            iso3: None,
        }),
        None => Step::Unresolved,
    }
}

fn by_iso3_table(query: &Query<'_>, index: &BoundaryIndex) -> Step {
    iso3_table_lookup(query, index).into()
}

fn iso3_table_lookup(query: &Query<'_>, index: &BoundaryIndex) -> Option<GeometryResolution> {
    let code = tables::iso3_for_name(query.key)
        .or_else(|| tables::iso3_for_name(query.display_name))?;
    let geometry = index.by_iso3(code)?.areal_geometry()?;
    Some(GeometryResolution {
        geometry: geometry.clone(),
        iso3: Some(code.to_owned()),
    })
}

fn by_display_name(query: &Query<'_>, index: &BoundaryIndex) -> Step {
    index.lookup(query.display_name).and_then(from_feature).into()
}

fn by_raw_key(query: &Query<'_>, index: &BoundaryIndex) -> Step {
    index.lookup(query.key).and_then(from_feature).into()
}

fn from_feature(feature: &BoundaryFeature) -> Option<GeometryResolution> {
    Some(GeometryResolution {
        geometry: feature.areal_geometry()?.clone(),
        iso3: feature.iso3.clone(),
    })
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
