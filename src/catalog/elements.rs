// src/catalog/elements.rs
//! Checklist of graphical elements required on submission drawings.
//!
//! Ids follow the municipal review checklist this catalog encodes and are
//! stable keys — detection adapters and persisted reports reference them.

use crate::types::{ElementCategory, GraphicalElement};

fn required(id: &str, name: &str, description: &str) -> GraphicalElement {
    GraphicalElement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        required: true,
        verified: false,
    }
}

fn optional(id: &str, name: &str, description: &str) -> GraphicalElement {
    GraphicalElement {
        required: false,
        ..required(id, name, description)
    }
}

fn category(id: &str, name: &str, elements: Vec<GraphicalElement>) -> ElementCategory {
    ElementCategory {
        id: id.to_string(),
        name: name.to_string(),
        elements,
    }
}

/// Returns a fresh copy of the full element checklist: six drawing
/// categories, 29 elements. The checklist is the same for every project
/// type.
#[must_use]
pub fn element_catalog() -> Vec<ElementCategory> {
    vec![
        category(
            "planta_baixa",
            "Floor plan",
            vec![
                required("pb_cotas", "Dimension lines", "Room, wall and opening dimensions"),
                required("pb_norte", "North arrow", "Orientation relative to geographic north"),
                required("pb_ambientes", "Room labels", "Identification of every room in the project"),
                required("pb_areas", "Room areas", "Area of each room in m²"),
                required("pb_esquadrias", "Door and window frames", "Representation and identification of frames"),
                optional("pb_projecoes", "Projections", "Dashed lines for elements projected from upper levels"),
            ],
        ),
        category(
            "cortes",
            "Sections",
            vec![
                required("corte_cotas_verticais", "Vertical dimensions", "Ceiling heights and other vertical measures"),
                required("corte_niveis", "Level marks", "Indication of the project's floor levels"),
                required("corte_terreno_natural", "Natural terrain profile", "Original terrain profile through the section"),
                required("corte_altura_edificacao", "Total building height", "Dimension of the building's maximum height"),
            ],
        ),
        category(
            "fachadas",
            "Facades",
            vec![
                required("fachada_niveis", "Level marks", "Indication of the facade's floor levels"),
                required("fachada_altura_total", "Total height", "Maximum building height on the facade"),
            ],
        ),
        category(
            "implantacao",
            "Site plan",
            vec![
                required("impl_recuos", "Setbacks", "Front, side and rear setback dimensions"),
                required("impl_norte", "North arrow", "Orientation relative to geographic north"),
                required("impl_dimensoes_terreno", "Lot dimensions", "Dimensions of the lot boundaries"),
                required("impl_area_permeavel", "Permeable area", "Indication and hatching of the permeable area"),
                required("impl_acessos", "Access points", "Pedestrian and vehicle access indication"),
                required("impl_passeio", "Public sidewalk", "Public sidewalk with its dimensions"),
            ],
        ),
        category(
            "quadro_areas",
            "Area summary",
            vec![
                required("qa_area_terreno", "Lot area", "Total lot area in m²"),
                required("qa_area_construida", "Built area", "Total and per-storey built area in m²"),
                required("qa_area_permeavel", "Permeable area", "Permeable area in m² and as a percentage"),
                required("qa_taxa_ocupacao", "Site coverage", "Percentage of the lot covered by the building"),
                required("qa_coef_aproveitamento", "Floor area ratio", "Ratio of built area to lot area"),
            ],
        ),
        category(
            "carimbo",
            "Title block",
            vec![
                required("carimbo_titulo", "Project title", "Name of the project"),
                required("carimbo_proprietario", "Owner", "Name of the owner"),
                required("carimbo_responsavel", "Responsible professional", "Name and professional registration number"),
                required("carimbo_escala", "Scale", "Scale of the drawing"),
                required("carimbo_data", "Date", "Date the drawing was produced"),
                required("carimbo_folha", "Sheet identification", "Sheet number and total sheet count"),
            ],
        ),
    ]
}
