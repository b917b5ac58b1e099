use super::layout::ReportWriter;
use crate::display::{Terminal, format_bytes, format_hits, format_percent_u64};
use crate::zfs::{L2Health, SectionStats, ZfsResult};

pub const L2ARC_ABSENT: &str = "L2ARC not detected, skipping section";

/// L2ARC block built from the l2_* counters in arcstats
pub fn render_l2arc(arc: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let mut w = ReportWriter::new(terminal);

    let size = arc.optional("l2_size")?.unwrap_or(0);
    if size == 0 {
        w.text(L2ARC_ABSENT);
        w.blank();
        return Ok(w.finish());
    }

    let write_errors = arc.value("l2_writes_error")?;
    let cksum_bad = arc.value("l2_cksum_bad")?;
    let io_errors = arc.value("l2_io_error")?;
    let health = L2Health::from_error_counts(&[write_errors, cksum_bad, io_errors]);

    w.status("L2ARC status:", &health.to_string(), health.is_healthy());
    w.line("Low memory aborts:", &format_hits(arc.value("l2_abort_lowmem")?));
    w.line("Free on write:", &format_hits(arc.value("l2_free_on_write")?));
    w.line("R/W clashes:", &format_hits(arc.value("l2_rw_clash")?));
    w.line("Bad checksums:", &format_hits(cksum_bad));
    w.line("I/O errors:", &format_hits(io_errors));
    w.line("Write errors:", &format_hits(write_errors));
    w.blank();

    let asize = arc.value("l2_asize")?;
    let hdr_size = arc.value("l2_hdr_size")?;
    w.title("L2ARC size (adaptive):", &format_bytes(size));
    w.line_pct("Compressed:", &format_percent_u64(asize, size), &format_bytes(asize));
    w.line_pct(
        "Header size:",
        &format_percent_u64(hdr_size, size),
        &format_bytes(hdr_size),
    );
    w.blank();

    let hits = arc.value("l2_hits")?;
    let misses = arc.value("l2_misses")?;
    let total = hits.saturating_add(misses);
    w.title("L2ARC breakdown:", &format_hits(total));
    w.line_pct("Hit ratio:", &format_percent_u64(hits, total), &format_hits(hits));
    w.line_pct("Miss ratio:", &format_percent_u64(misses, total), &format_hits(misses));
    w.line("Feeds:", &format_hits(arc.value("l2_feeds")?));
    w.blank();

    w.heading("L2ARC I/O:");
    w.line("Read bytes:", &format_bytes(arc.value("l2_read_bytes")?));
    w.line("Write bytes:", &format_bytes(arc.value("l2_write_bytes")?));
    w.line("Writes sent:", &format_hits(arc.value("l2_writes_sent")?));
    w.line("Writes done:", &format_hits(arc.value("l2_writes_done")?));
    w.blank();

    Ok(w.finish())
}
