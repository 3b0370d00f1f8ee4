// tests/unit_catalog.rs
//! Unit tests for the rule catalogs.
//!
//! VERIFICATION STRATEGY:
//! 1. Shape: category count, element count, required/optional split.
//! 2. Identity: ids are unique and stable across copies.
//! 3. Profiles: each project type gets its own reference values; unknown
//!    slugs fall back to the single-family residential profile.

use std::collections::HashSet;

use plancheck_core::catalog::{element_catalog, parameter_catalog};
use plancheck_core::types::{ComparisonMode, ProjectType};

const ALL_TYPES: [ProjectType; 5] = [
    ProjectType::ResidentialSingleFamily,
    ProjectType::ResidentialMultiFamily,
    ProjectType::Commercial,
    ProjectType::MixedUse,
    ProjectType::Industrial,
];

#[test]
fn test_element_catalog_shape() {
    let catalog = element_catalog();
    assert_eq!(catalog.len(), 6, "expected six drawing categories");

    let elements: Vec<_> = catalog.iter().flat_map(|c| c.elements.iter()).collect();
    assert_eq!(elements.len(), 29, "expected 29 elements total");

    let required = elements.iter().filter(|e| e.required).count();
    assert_eq!(required, 28, "only pb_projecoes should be optional");

    let optional: Vec<_> = elements.iter().filter(|e| !e.required).collect();
    assert_eq!(optional.len(), 1);
    assert_eq!(optional[0].id, "pb_projecoes");

    assert!(
        elements.iter().all(|e| !e.verified),
        "catalog template must start unverified"
    );
}

#[test]
fn test_element_ids_unique() {
    let catalog = element_catalog();
    let mut seen = HashSet::new();
    for element in catalog.iter().flat_map(|c| c.elements.iter()) {
        assert!(seen.insert(element.id.clone()), "duplicate id {}", element.id);
    }
}

#[test]
fn test_catalog_copies_are_independent() {
    let mut first = element_catalog();
    first[0].elements[0].verified = true;

    let second = element_catalog();
    assert!(
        !second[0].elements[0].verified,
        "mutating one copy must not leak into later copies"
    );
}

#[test]
fn test_every_profile_is_well_formed() {
    for project_type in ALL_TYPES {
        let profile = parameter_catalog(project_type);
        assert_eq!(profile.len(), 4, "{}: four categories", project_type.slug());
        for category in &profile {
            for p in &category.parameters {
                assert!(
                    p.reference_value > 0.0,
                    "{}: {} needs a positive reference",
                    project_type.slug(),
                    p.id
                );
                assert!(p.project_value.is_none(), "template has no project values");
                assert!(p.conformant.is_none(), "conformant is derived, never preset");
            }
        }
    }
}

#[test]
fn test_profiles_differ_by_project_type() {
    let single = parameter_catalog(ProjectType::ResidentialSingleFamily);
    let multi = parameter_catalog(ProjectType::ResidentialMultiFamily);

    let front = |profile: &[plancheck_core::types::ParameterCategory]| {
        profile
            .iter()
            .flat_map(|c| c.parameters.iter())
            .find(|p| p.id == "recuo_frontal")
            .map(|p| p.reference_value)
            .unwrap()
    };
    assert_eq!(front(&single), 3.0);
    assert_eq!(front(&multi), 5.0);
}

#[test]
fn test_storey_count_is_residential_only() {
    let has_storeys = |project_type| {
        parameter_catalog(project_type)
            .iter()
            .flat_map(|c| c.parameters.iter())
            .any(|p| p.id == "num_pavimentos")
    };
    assert!(has_storeys(ProjectType::ResidentialSingleFamily));
    assert!(has_storeys(ProjectType::ResidentialMultiFamily));
    assert!(!has_storeys(ProjectType::Commercial));
    assert!(!has_storeys(ProjectType::MixedUse));
    assert!(!has_storeys(ProjectType::Industrial));
}

#[test]
fn test_setbacks_are_minimums_coverage_is_maximum() {
    let profile = parameter_catalog(ProjectType::Industrial);
    for p in profile.iter().flat_map(|c| c.parameters.iter()) {
        match p.id.as_str() {
            "recuo_frontal" | "recuo_lateral" | "recuo_fundos" | "taxa_permeabilidade"
            | "largura_acesso_pedestres" => {
                assert_eq!(p.comparison, ComparisonMode::Minimum, "{}", p.id);
            }
            _ => assert_eq!(p.comparison, ComparisonMode::Maximum, "{}", p.id),
        }
    }
}

#[test]
fn test_unknown_slug_falls_back_to_default() {
    assert_eq!(ProjectType::parse("warehouse"), None);
    assert_eq!(
        ProjectType::from_slug("warehouse"),
        ProjectType::ResidentialSingleFamily
    );
    assert_eq!(
        ProjectType::from_slug("mixed-use"),
        ProjectType::MixedUse,
        "known slugs must not fall back"
    );
}
