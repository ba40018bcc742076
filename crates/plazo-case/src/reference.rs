//! # Reference Tables
//!
//! Static registries consumed read-only: crime types with their statutory
//! prescription spans, and the ordered process stages. The single-shot
//! calculator resolves crime types here; nothing in the windowed engine
//! depends on these tables.

use serde::{Deserialize, Serialize};

/// A crime type with its statutory prescription span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeType {
    /// Short identifier (e.g., "robbery").
    pub id: String,
    /// Spanish display name.
    pub name: String,
    /// Statutory prescription span in whole years.
    pub prescription_years: u32,
}

/// A process stage with its procedural order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStageInfo {
    /// Short identifier (e.g., "instruction").
    pub id: String,
    /// Spanish display name.
    pub name: String,
    /// 1-based position in the procedure.
    pub order: u32,
}

/// The built-in crime-type registry.
pub fn crime_type_registry() -> Vec<CrimeType> {
    vec![
        CrimeType {
            id: "homicide".to_string(),
            name: "Homicidio".to_string(),
            prescription_years: 15,
        },
        CrimeType {
            id: "robbery".to_string(),
            name: "Robo".to_string(),
            prescription_years: 10,
        },
        CrimeType {
            id: "fraud".to_string(),
            name: "Fraude".to_string(),
            prescription_years: 8,
        },
        CrimeType {
            id: "assault".to_string(),
            name: "Agresión".to_string(),
            prescription_years: 5,
        },
        CrimeType {
            id: "threats".to_string(),
            name: "Amenazas".to_string(),
            prescription_years: 3,
        },
    ]
}

/// The built-in process-stage registry, in procedural order.
pub fn process_stage_registry() -> Vec<ProcessStageInfo> {
    vec![
        ProcessStageInfo {
            id: "investigation".to_string(),
            name: "Investigación Preliminar".to_string(),
            order: 1,
        },
        ProcessStageInfo {
            id: "instruction".to_string(),
            name: "Instrucción".to_string(),
            order: 2,
        },
        ProcessStageInfo {
            id: "trial".to_string(),
            name: "Juicio".to_string(),
            order: 3,
        },
        ProcessStageInfo {
            id: "recurse".to_string(),
            name: "Etapa Recursiva".to_string(),
            order: 4,
        },
    ]
}

/// Look up a crime type by identifier.
pub fn find_crime_type(id: &str) -> Option<CrimeType> {
    crime_type_registry().into_iter().find(|c| c.id == id)
}
