//! Plan rendering: the `C`-line text format and the JSON document.
//!
//! Text format, one line per truck id in the requested range:
//!
//! ```text
//! C<id> <source>,<destination> <source>,<destination> ...
//! ```
//!
//! The id follows `C` with no space; each pair is space-separated from the
//! previous token and comma-joined internally. A truck with no pairs emits
//! a bare `C<id>` line.

use std::io::{self, Write};

use convoy_core::assign::TruckPlan;
use convoy_core::graph::NodeId;
use serde::Serialize;

/// Write the plan's `C` lines for trucks `lo..=hi`.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn render_plan_text(
    plan: &TruckPlan,
    lo: u64,
    hi: u64,
    w: &mut dyn Write,
) -> io::Result<()> {
    for truck in lo..=hi {
        write!(w, "C{truck}")?;
        for &(source, dest) in plan.pairs(truck) {
            write!(w, " {source},{dest}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct PlanDoc {
    trucks: u64,
    range: [u64; 2],
    assignments: Vec<TruckDoc>,
}

#[derive(Debug, Serialize)]
struct TruckDoc {
    truck: u64,
    pairs: Vec<(NodeId, NodeId)>,
}

/// Write the plan for trucks `lo..=hi` as one JSON document.
///
/// # Errors
///
/// Returns serialization or I/O errors from the writer.
pub fn render_plan_json(
    plan: &TruckPlan,
    lo: u64,
    hi: u64,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let doc = PlanDoc {
        trucks: plan.truck_count(),
        range: [lo, hi],
        assignments: (lo..=hi)
            .map(|truck| TruckDoc {
                truck,
                pairs: plan.pairs(truck).to_vec(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *w, &doc)?;
    writeln!(w)?;
    Ok(())
}
