//! # Timeline Subcommand
//!
//! Prints the projected axis for the stored case: marker positions at the
//! requested zoom, segment durations, and the centering offset for a
//! viewport width.

use clap::Args;

use plazo_case::DirectoryStore;
use plazo_core::format_date;
use plazo_engine::{project, Zoom};

use crate::open_case;

/// Arguments for `plazo timeline`.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Zoom-in steps from the default scale.
    #[arg(long, default_value_t = 0, conflicts_with = "zoom_out")]
    pub zoom_in: u32,

    /// Zoom-out steps from the default scale.
    #[arg(long, default_value_t = 0)]
    pub zoom_out: u32,

    /// Viewport width in axis units; prints the centering offset.
    #[arg(long)]
    pub viewport: Option<f64>,
}

/// Run `plazo timeline`.
pub fn run_timeline(args: &TimelineArgs, store: &mut DirectoryStore) -> anyhow::Result<u8> {
    let case = open_case(store)?;

    let mut zoom = Zoom::default();
    for _ in 0..args.zoom_in {
        zoom = zoom.zoom_in();
    }
    for _ in 0..args.zoom_out {
        zoom = zoom.zoom_out();
    }

    let projection = project(&case, zoom)?;
    println!(
        "Escala: x{:.3}  Largo del eje: {:.1}",
        projection.zoom.factor(),
        projection.axis_length
    );
    println!(
        "Fecha del hecho: {} (posición 0)",
        format_date(projection.origin)
    );
    for marker in &projection.markers {
        let interruption = if marker.is_interruption { " [interrupción]" } else { "" };
        println!(
            "  {:>10.1}  {}  {}{}",
            marker.position,
            format_date(marker.date),
            marker.name,
            interruption
        );
        if let Some(segment) = marker.since_previous {
            println!("              desde el evento anterior: {segment}");
        }
    }
    if let Some(viewport) = args.viewport {
        println!(
            "Desplazamiento para centrar: {:.1}",
            projection.center_offset(viewport)
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{run_event, EventArgs};
    use crate::init::{run_init, InitArgs};
    use crate::set::{run_set, SetArgs};
    use plazo_core::well_known;

    fn dated_store() -> (tempfile::TempDir, DirectoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        run_init(&InitArgs { force: false }, &mut store).unwrap();
        run_set(
            &SetArgs {
                crime_date: Some("01/01/2020".to_string()),
                penalty_years: None,
                crime_type: None,
                today: Some("01/07/2024".to_string()),
            },
            &mut store,
        )
        .unwrap();
        run_event(
            &EventArgs {
                id: well_known::INDICTMENT.to_string(),
                date: Some("11/01/2020".to_string()),
                clear_date: false,
                end_date: None,
                clear_end_date: false,
                recurse_type: None,
                tribunal: None,
                today: Some("01/07/2024".to_string()),
            },
            &mut store,
        )
        .unwrap();
        (dir, store)
    }

    #[test]
    fn timeline_prints_markers() {
        let (_dir, mut store) = dated_store();
        let args = TimelineArgs {
            zoom_in: 0,
            zoom_out: 0,
            viewport: Some(500.0),
        };
        assert_eq!(run_timeline(&args, &mut store).unwrap(), 0);
    }

    #[test]
    fn timeline_fails_without_dated_events() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(dir.path());
        run_init(&InitArgs { force: false }, &mut store).unwrap();
        let args = TimelineArgs {
            zoom_in: 0,
            zoom_out: 0,
            viewport: None,
        };
        assert!(run_timeline(&args, &mut store).is_err());
    }
}
