//! Driving loop - pull records, decode, print
//!
//! Strictly sequential: one record at a time, one summary block per record,
//! no state carried between iterations. Stops at the message limit or when
//! the source runs dry, whichever comes first.

use std::io::Write;

use codec::{FrameSummary, RenderedFrame};
use tracing::{debug, info};

use crate::error::Result;
use crate::source::{InspectorRecord, RecordSource};

/// Consume up to `limit` records from `source`, printing a summary block for
/// each to `out`. Returns the number of records inspected.
pub async fn run<S, W>(source: &mut S, limit: usize, out: &mut W) -> Result<usize>
where
    S: RecordSource,
    W: Write,
{
    let mut inspected = 0;

    while inspected < limit {
        let Some(record) = source.next_record().await? else {
            debug!(inspected, "source exhausted before limit");
            break;
        };
        inspect_record(&record, inspected, out)?;
        inspected += 1;
    }

    Ok(inspected)
}

fn inspect_record<W: Write>(record: &InspectorRecord, index: usize, out: &mut W) -> Result<()> {
    let summary = FrameSummary::decode(&record.payload);

    if summary.len > 0 && !summary.is_registry_framed() {
        info!(
            partition = record.partition,
            offset = record.offset,
            "payload does not lead with the registry wire marker"
        );
    }

    // Blank line between blocks, matching the original output layout
    writeln!(out)?;
    writeln!(out, "{}", RenderedFrame::new(&summary, index))?;
    Ok(())
}
