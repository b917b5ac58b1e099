//! ARC summary and ARC efficiency blocks

use super::layout::ReportWriter;
use crate::display::{PERCENT_PLACEHOLDER, Terminal, format_bytes, format_hits, format_percent_u64};
use crate::zfs::{ArcSize, SectionStats, ZfsResult};

/// ARC status, sizes, hash table and eviction counters
pub fn render_arc_summary(arc: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let size = ArcSize::from_stats(arc)?;
    let health = size.health();
    let mut w = ReportWriter::new(terminal);

    w.status("ARC status:", &health.to_string(), health.is_healthy());
    w.line("Memory throttle count:", &format_hits(size.throttle_count));
    w.blank();

    w.title_pct("ARC size (current):", &size.size_percent(), &format_bytes(size.size));
    w.line_pct(
        "Target size (adaptive):",
        &format_percent_u64(size.target, size.max),
        &format_bytes(size.target),
    );
    w.line_pct(
        "Min size (hard limit):",
        &format_percent_u64(size.min, size.max),
        &format_bytes(size.min),
    );
    w.line_pct(
        "Max size (high water):",
        &max_to_min_ratio(size.max, size.min),
        &format_bytes(size.max),
    );
    w.line_pct(
        "Most Frequently Used (MFU) cache size:",
        &size.mfu_percent(),
        &format_bytes(size.mfu),
    );
    w.line_pct(
        "Most Recently Used (MRU) cache size:",
        &size.mru_percent(),
        &format_bytes(size.mru),
    );

    // Only exported by some module versions
    if let (Some(limit), Some(used)) = (arc.optional("arc_meta_limit")?, arc.optional("arc_meta_used")?) {
        w.line_pct(
            "Metadata cache size (hard limit):",
            &format_percent_u64(limit, size.max),
            &format_bytes(limit),
        );
        w.line_pct(
            "Metadata cache size (current):",
            &format_percent_u64(used, limit),
            &format_bytes(used),
        );
    }
    if let (Some(limit), Some(used)) = (arc.optional("arc_dnode_limit")?, arc.optional("dnode_size")?) {
        w.line_pct(
            "Dnode cache target:",
            &format_percent_u64(limit, size.max),
            &format_bytes(limit),
        );
        w.line_pct(
            "Dnode cache size:",
            &format_percent_u64(used, limit),
            &format_bytes(used),
        );
    }
    w.blank();

    let elements = arc.value("hash_elements")?;
    let elements_max = arc.value("hash_elements_max")?;
    w.heading("ARC hash breakdown:");
    w.line("Elements max:", &format_hits(elements_max));
    w.line_pct(
        "Elements current:",
        &format_percent_u64(elements, elements_max),
        &format_hits(elements),
    );
    w.line("Collisions:", &format_hits(arc.value("hash_collisions")?));
    w.line("Chain max:", &format_hits(arc.value("hash_chain_max")?));
    w.line("Chains:", &format_hits(arc.value("hash_chains")?));
    w.blank();

    w.heading("ARC misc:");
    w.line("Deleted:", &format_hits(arc.value("deleted")?));
    w.line("Mutex misses:", &format_hits(arc.value("mutex_miss")?));
    w.line("Eviction skips:", &format_hits(arc.value("evict_skip")?));
    w.blank();

    Ok(w.finish())
}

/// Hit and miss ratios, overall and broken down by cache list and data type
pub fn render_arc_efficiency(arc: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let hits = arc.value("hits")?;
    let misses = arc.value("misses")?;
    let total = hits.saturating_add(misses);
    let mfu_hits = arc.value("mfu_hits")?;
    let mru_hits = arc.value("mru_hits")?;
    let actual_hits = mfu_hits.saturating_add(mru_hits);

    let dd_hits = arc.value("demand_data_hits")?;
    let dd_misses = arc.value("demand_data_misses")?;
    let dm_hits = arc.value("demand_metadata_hits")?;
    let dm_misses = arc.value("demand_metadata_misses")?;
    let pd_hits = arc.value("prefetch_data_hits")?;
    let pd_misses = arc.value("prefetch_data_misses")?;
    let pm_hits = arc.value("prefetch_metadata_hits")?;
    let pm_misses = arc.value("prefetch_metadata_misses")?;

    let mut w = ReportWriter::new(terminal);

    w.title("ARC total accesses (hits + misses):", &format_hits(total));
    w.line_pct("Cache hit ratio:", &format_percent_u64(hits, total), &format_hits(hits));
    w.line_pct("Cache miss ratio:", &format_percent_u64(misses, total), &format_hits(misses));
    w.line_pct(
        "Actual hit ratio (MFU + MRU hits):",
        &format_percent_u64(actual_hits, total),
        &format_hits(actual_hits),
    );
    let dd_total = dd_hits.saturating_add(dd_misses);
    w.line_pct(
        "Data demand efficiency:",
        &format_percent_u64(dd_hits, dd_total),
        &format_hits(dd_total),
    );
    let pd_total = pd_hits.saturating_add(pd_misses);
    w.line_pct(
        "Data prefetch efficiency:",
        &format_percent_u64(pd_hits, pd_total),
        &format_hits(pd_total),
    );
    w.blank();

    w.heading("Cache hits by cache type:");
    let by_list = [
        ("Most frequently used (MFU):", mfu_hits),
        ("Most recently used (MRU):", mru_hits),
        ("Most frequently used (MFU) ghost:", arc.value("mfu_ghost_hits")?),
        ("Most recently used (MRU) ghost:", arc.value("mru_ghost_hits")?),
    ];
    for (label, count) in by_list {
        w.line_pct(label, &format_percent_u64(count, hits), &format_hits(count));
    }
    w.blank();

    w.heading("Cache hits by data type:");
    for (label, count) in [
        ("Demand data:", dd_hits),
        ("Prefetch data:", pd_hits),
        ("Demand metadata:", dm_hits),
        ("Prefetch metadata:", pm_hits),
    ] {
        w.line_pct(label, &format_percent_u64(count, hits), &format_hits(count));
    }
    w.blank();

    w.heading("Cache misses by data type:");
    for (label, count) in [
        ("Demand data:", dd_misses),
        ("Prefetch data:", pd_misses),
        ("Demand metadata:", dm_misses),
        ("Prefetch metadata:", pm_misses),
    ] {
        w.line_pct(label, &format_percent_u64(count, misses), &format_hits(count));
    }
    w.blank();

    Ok(w.finish())
}

/// "16:1" style ratio of the maximum to the minimum size
fn max_to_min_ratio(max: u64, min: u64) -> String {
    match max.checked_div(min) {
        Some(ratio) => format!("{}:1", ratio),
        None => PERCENT_PLACEHOLDER.to_string(),
    }
}
