// src/catalog/profiles.rs
//! Urban parameter profiles, one per project type.
//!
//! Each profile is a fully-specified, immutable set of reference values.
//! There is no inheritance or merging between profiles: the numbers below
//! are each a complete transcription of the regulation variant for that
//! building-use category.

use crate::types::{ComparisonMode, ParameterCategory, ProjectType, UrbanParameter};

fn parameter(
    id: &str,
    name: &str,
    description: &str,
    unit: &str,
    reference_value: f64,
    comparison: ComparisonMode,
) -> UrbanParameter {
    UrbanParameter {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unit: unit.to_string(),
        project_value: None,
        reference_value,
        comparison,
        conformant: None,
    }
}

fn setbacks(front: f64, side: f64, rear: f64) -> ParameterCategory {
    ParameterCategory {
        id: "recuos".to_string(),
        name: "Setbacks".to_string(),
        parameters: vec![
            parameter(
                "recuo_frontal",
                "Front setback",
                "Minimum distance between the building and the front lot line",
                "m",
                front,
                ComparisonMode::Minimum,
            ),
            parameter(
                "recuo_lateral",
                "Side setback",
                "Minimum distance between the building and the side lot lines",
                "m",
                side,
                ComparisonMode::Minimum,
            ),
            parameter(
                "recuo_fundos",
                "Rear setback",
                "Minimum distance between the building and the rear lot line",
                "m",
                rear,
                ComparisonMode::Minimum,
            ),
        ],
    }
}

fn occupancy(coverage: f64, floor_area_ratio: f64, permeability: f64) -> ParameterCategory {
    ParameterCategory {
        id: "ocupacao".to_string(),
        name: "Occupancy".to_string(),
        parameters: vec![
            parameter(
                "taxa_ocupacao",
                "Site coverage",
                "Maximum percentage of the lot covered by the building footprint",
                "%",
                coverage,
                ComparisonMode::Maximum,
            ),
            parameter(
                "coef_aproveitamento",
                "Floor area ratio",
                "Maximum ratio of total built area to lot area",
                "",
                floor_area_ratio,
                ComparisonMode::Maximum,
            ),
            parameter(
                "taxa_permeabilidade",
                "Permeability ratio",
                "Minimum percentage of the lot that must remain permeable",
                "%",
                permeability,
                ComparisonMode::Minimum,
            ),
        ],
    }
}

// Storey count is only regulated for residential profiles.
fn massing(height: f64, storeys: Option<f64>) -> ParameterCategory {
    let mut parameters = vec![parameter(
        "altura_edificacao",
        "Building height",
        "Maximum building height measured from natural ground level",
        "m",
        height,
        ComparisonMode::Maximum,
    )];
    if let Some(count) = storeys {
        parameters.push(parameter(
            "num_pavimentos",
            "Storey count",
            "Maximum number of storeys allowed",
            "",
            count,
            ComparisonMode::Maximum,
        ));
    }
    ParameterCategory {
        id: "volumetria".to_string(),
        name: "Massing".to_string(),
        parameters,
    }
}

fn access(vehicle_width: f64, ramp_slope: f64, pedestrian_width: f64) -> ParameterCategory {
    ParameterCategory {
        id: "acessos".to_string(),
        name: "Access".to_string(),
        parameters: vec![
            parameter(
                "largura_acesso_veiculos",
                "Vehicle access width",
                "Maximum width allowed for the vehicle access",
                "m",
                vehicle_width,
                ComparisonMode::Maximum,
            ),
            parameter(
                "inclinacao_rampa",
                "Access ramp slope",
                "Maximum slope allowed for access ramps",
                "%",
                ramp_slope,
                ComparisonMode::Maximum,
            ),
            parameter(
                "largura_acesso_pedestres",
                "Pedestrian access width",
                "Minimum width required for the pedestrian access",
                "m",
                pedestrian_width,
                ComparisonMode::Minimum,
            ),
        ],
    }
}

/// Returns a fresh copy of the parameter profile for `project_type`.
#[must_use]
pub fn parameter_catalog(project_type: ProjectType) -> Vec<ParameterCategory> {
    match project_type {
        ProjectType::ResidentialSingleFamily => vec![
            setbacks(3.0, 1.5, 2.0),
            occupancy(60.0, 1.2, 20.0),
            massing(10.0, Some(2.0)),
            access(6.0, 20.0, 1.2),
        ],
        ProjectType::ResidentialMultiFamily => vec![
            setbacks(5.0, 2.0, 3.0),
            occupancy(50.0, 2.0, 25.0),
            massing(15.0, Some(5.0)),
            access(6.0, 16.7, 1.5),
        ],
        ProjectType::Commercial => vec![
            setbacks(3.0, 2.0, 2.0),
            occupancy(70.0, 2.5, 15.0),
            massing(12.0, None),
            access(6.0, 16.7, 2.0),
        ],
        ProjectType::MixedUse => vec![
            setbacks(4.0, 2.0, 2.5),
            occupancy(60.0, 2.0, 20.0),
            massing(15.0, None),
            access(6.0, 16.7, 2.0),
        ],
        ProjectType::Industrial => vec![
            setbacks(5.0, 3.0, 3.0),
            occupancy(50.0, 1.0, 30.0),
            massing(12.0, None),
            access(8.0, 12.5, 2.0),
        ],
    }
}
