// tests/unit_adapters.rs
//! Property tests for the simulated adapters. Their output is random, so
//! assertions are structural: ids must exist in the catalog and values must
//! be finite and non-negative.

use std::collections::HashSet;

use plancheck_core::adapters::{
    ElementDetector, ParameterExtractor, SimulatedDetector, SimulatedExtractor,
};
use plancheck_core::catalog::element_catalog;
use plancheck_core::types::ProjectType;

#[test]
fn test_simulated_detector_returns_catalog_ids_only() {
    let known: HashSet<String> = element_catalog()
        .iter()
        .flat_map(|c| c.elements.iter())
        .map(|e| e.id.clone())
        .collect();

    let detector = SimulatedDetector::new();
    for _ in 0..10 {
        let detected = detector
            .detect(&[], ProjectType::ResidentialSingleFamily)
            .unwrap();
        assert!(
            detected.iter().all(|id| known.contains(id)),
            "detector must only report ids from the catalog"
        );
    }
}

#[test]
fn test_simulated_detector_dropout_extremes() {
    let everything = SimulatedDetector { dropout: 0.0 };
    let detected = everything
        .detect(&[], ProjectType::ResidentialSingleFamily)
        .unwrap();
    assert_eq!(detected.len(), 24, "zero dropout keeps every candidate id");

    let nothing = SimulatedDetector { dropout: 1.1 };
    let detected = nothing
        .detect(&[], ProjectType::ResidentialSingleFamily)
        .unwrap();
    assert!(detected.is_empty());
}

#[test]
fn test_simulated_extractor_populates_every_parameter() {
    let extractor = SimulatedExtractor::new();
    let categories = extractor.extract(&[], ProjectType::Commercial).unwrap();

    for p in categories.iter().flat_map(|c| c.parameters.iter()) {
        let value = p.project_value.expect("every parameter gets a value");
        assert!(value.is_finite());
        assert!(value >= 0.0, "{}: jitter is clamped at zero", p.id);
        // One decimal place: scaling by 10 yields an integer.
        assert!(((value * 10.0).round() - value * 10.0).abs() < 1e-9);
        assert!(p.conformant.is_none(), "extraction never pre-judges conformance");
    }
}

#[test]
fn test_simulated_extractor_respects_project_type() {
    let extractor = SimulatedExtractor { jitter: 0.0 };
    let categories = extractor.extract(&[], ProjectType::Industrial).unwrap();
    let ramp = categories
        .iter()
        .flat_map(|c| c.parameters.iter())
        .find(|p| p.id == "inclinacao_rampa")
        .unwrap();
    // Zero jitter reproduces the profile's reference values.
    assert_eq!(ramp.project_value, Some(12.5));
}
