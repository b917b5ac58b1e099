//! DMU, prefetch, vdev cache, XUIO and ZIL blocks

use super::layout::ReportWriter;
use crate::display::{Terminal, format_bytes, format_hits, format_percent, format_percent_u64};
use crate::zfs::{SectionStats, VdevCacheRatios, ZfsResult};

/// Transaction counters, each as a share of assigned transactions
pub fn render_dmu(dmu: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    const TOTAL: &str = "dmu_tx_assigned";

    let assigned = dmu.value(TOTAL)?;
    let assigned_raw = assigned.to_string();
    let mut w = ReportWriter::new(terminal);

    w.title("DMU TX (assigned):", &format_hits(assigned));
    for name in dmu.sorted_names() {
        if name == TOTAL {
            continue;
        }
        let raw = dmu.get(name).unwrap_or_default();
        let count = dmu.value(name)?;
        w.line_pct(
            &format!("{}:", name),
            &format_percent(raw, &assigned_raw)?,
            &format_hits(count),
        );
    }
    w.blank();

    Ok(w.finish())
}

/// File-level prefetcher efficiency
pub fn render_zfetch(zfetch: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let hits = zfetch.value("hits")?;
    let misses = zfetch.value("misses")?;
    let total = zfetch.sum(&["hits", "misses"])?;
    let mut w = ReportWriter::new(terminal);

    w.title("DMU prefetch efficiency:", &format_hits(total));
    w.line_pct("Hit ratio:", &format_percent_u64(hits, total), &format_hits(hits));
    w.line_pct("Miss ratio:", &format_percent_u64(misses, total), &format_hits(misses));
    if let Some(streams) = zfetch.optional("max_streams")? {
        w.line("Max streams reached:", &format_hits(streams));
    }
    w.blank();

    Ok(w.finish())
}

/// Vdev cache hits, misses and delegations against their sum
pub fn render_vdev(vdev: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let ratios = VdevCacheRatios::from_stats(vdev)?;
    let mut w = ReportWriter::new(terminal);

    w.title("VDEV cache summary:", &format_hits(ratios.total()));
    w.line_pct("Hit ratio:", &ratios.hit_percent(), &format_hits(ratios.hits));
    w.line_pct("Miss ratio:", &ratios.miss_percent(), &format_hits(ratios.misses));
    w.line_pct(
        "Delegations:",
        &ratios.delegation_percent(),
        &format_hits(ratios.delegations),
    );
    w.blank();

    Ok(w.finish())
}

pub fn render_xuio(xuio: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let mut w = ReportWriter::new(terminal);
    w.heading("XUIO statistics:");
    write_counters(&mut w, xuio)?;
    w.blank();
    Ok(w.finish())
}

pub fn render_zil(zil: &SectionStats, terminal: &Terminal) -> ZfsResult<String> {
    let mut w = ReportWriter::new(terminal);
    w.heading("ZIL statistics:");
    write_counters(&mut w, zil)?;
    w.blank();
    Ok(w.finish())
}

/// One line per statistic in name order; `*_bytes` counters render as sizes
fn write_counters(w: &mut ReportWriter<'_>, stats: &SectionStats) -> ZfsResult<()> {
    for name in stats.sorted_names() {
        let value = stats.value(name)?;
        let shown = if name.ends_with("_bytes") {
            format_bytes(value)
        } else {
            format_hits(value)
        };
        w.line(&format!("{}:", name), &shown);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PERCENT_PLACEHOLDER;
    use crate::report::test_support::stats;
    use crate::zfs::ZfsError;

    #[test]
    fn test_dmu_percentages_of_assigned() {
        let dmu = stats(
            "dmu",
            &[
                ("dmu_tx_assigned", 200),
                ("dmu_tx_dirty_delay", 50),
                ("dmu_tx_error", 0),
            ],
        );
        let out = render_dmu(&dmu, &Terminal::plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("DMU TX (assigned):") && lines[0].ends_with("200"));
        assert!(lines[1].contains("dmu_tx_dirty_delay:") && lines[1].contains("25.0 %"));
        assert!(lines[2].contains("dmu_tx_error:") && lines[2].contains("0.0 %"));
        assert!(!out.contains("dmu_tx_assigned:"));
    }

    #[test]
    fn test_dmu_nothing_assigned() {
        let dmu = stats("dmu", &[("dmu_tx_assigned", 0), ("dmu_tx_quota", 3)]);
        let out = render_dmu(&dmu, &Terminal::plain()).unwrap();
        assert!(out.contains(PERCENT_PLACEHOLDER));
    }

    #[test]
    fn test_vdev_summary() {
        let vdev = stats("vdev", &[("delegations", 20), ("hits", 50), ("misses", 30)]);
        let out = render_vdev(&vdev, &Terminal::plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("VDEV cache summary:") && lines[0].ends_with("100"));
        assert!(lines[1].contains("Hit ratio:") && lines[1].contains("50.0 %"));
        assert!(lines[2].contains("Miss ratio:") && lines[2].contains("30.0 %"));
        assert!(lines[3].contains("Delegations:") && lines[3].contains("20.0 %"));
    }

    #[test]
    fn test_vdev_summary_disabled_cache() {
        let vdev = stats("vdev", &[("delegations", 0), ("hits", 0), ("misses", 0)]);
        let out = render_vdev(&vdev, &Terminal::plain()).unwrap();
        assert_eq!(out.matches(PERCENT_PLACEHOLDER).count(), 3);
    }

    #[test]
    fn test_vdev_summary_missing_counter() {
        let vdev = stats("vdev", &[("hits", 1), ("misses", 1)]);
        let result = render_vdev(&vdev, &Terminal::plain());
        assert!(matches!(result, Err(ZfsError::MissingStatistic { .. })));
    }

    #[test]
    fn test_zfetch() {
        let zfetch = stats("zfetch", &[("hits", 1), ("misses", 3), ("max_streams", 1200)]);
        let out = render_zfetch(&zfetch, &Terminal::plain()).unwrap();
        assert!(out.contains("25.0 %"));
        assert!(out.contains("75.0 %"));
        assert!(out.contains("Max streams reached:"));
        assert!(out.contains("1.2k"));
    }

    #[test]
    fn test_zil_renders_bytes_and_counts() {
        let zil = stats(
            "zil",
            &[("zil_commit_count", 2048), ("zil_itx_copied_bytes", 2048)],
        );
        let out = render_zil(&zil, &Terminal::plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "ZIL statistics:");
        assert!(lines[1].starts_with("    zil_commit_count:") && lines[1].ends_with("2.0k"));
        assert!(lines[2].starts_with("    zil_itx_copied_bytes:") && lines[2].ends_with("2.0 KiB"));
    }

    #[test]
    fn test_xuio_counters() {
        let xuio = stats("xuio", &[("read_buf_copied", 0), ("onloan_read_buf", 7)]);
        let out = render_xuio(&xuio, &Terminal::plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "XUIO statistics:");
        assert!(lines[1].contains("onloan_read_buf:"));
        assert!(lines[2].contains("read_buf_copied:"));
    }
}
