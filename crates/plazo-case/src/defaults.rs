//! # Starter Event List
//!
//! Every new case is seeded with the same eight undated events covering the
//! instruction, trial, and recurse stages. The interruption flags mark the
//! three milestones that restart the limitation clock.

use plazo_core::{well_known, EventId, ProceduralEvent, ProcessStage};

fn slug(raw: &'static str) -> EventId {
    // The starter slugs are compile-time constants from `well_known`.
    EventId::new(raw).expect("starter event id is a valid slug")
}

fn starter(
    id: &'static str,
    name: &'static str,
    stage: ProcessStage,
    is_interruption: bool,
) -> ProceduralEvent {
    ProceduralEvent {
        id: slug(id),
        name: name.to_string(),
        date: None,
        end_date: None,
        stage,
        is_interruption,
        recurse_type: None,
        tribunal: None,
    }
}

/// The starter event list, in procedural order, all undated.
pub fn starter_events() -> Vec<ProceduralEvent> {
    vec![
        // ── Etapa de Instrucción ─────────────────────────────────────
        starter(
            well_known::INSTRUCTION_START,
            "Inicio de Instrucción",
            ProcessStage::Instruction,
            false,
        ),
        starter(
            well_known::INDICTMENT,
            "Primer llamado a indagatoria",
            ProcessStage::Instruction,
            true,
        ),
        starter(
            well_known::DECLARATION,
            "Declaración indagatoria",
            ProcessStage::Instruction,
            false,
        ),
        starter(
            well_known::PROCESSING,
            "Procesamiento",
            ProcessStage::Instruction,
            false,
        ),
        starter(
            well_known::INSTRUCTION_END,
            "Requerimiento de elevación a juicio",
            ProcessStage::Instruction,
            true,
        ),
        // ── Etapa de Juicio ──────────────────────────────────────────
        starter(
            well_known::TRIAL_CITATION,
            "Decreto de citación a juicio",
            ProcessStage::Trial,
            true,
        ),
        starter(
            well_known::SENTENCE,
            "Sentencia",
            ProcessStage::Trial,
            false,
        ),
        // ── Etapa Recursiva ──────────────────────────────────────────
        starter(
            well_known::RECURSE_START,
            "Inicio Etapa Recursiva",
            ProcessStage::Recurse,
            false,
        ),
    ]
}
