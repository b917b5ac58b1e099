use crate::display::{ProgressBar, format_bytes};
use crate::zfs::{ArcSize, SectionStats, ZfsResult};

const GRAPH_WIDTH: usize = 60;
const GRAPH_INDENT: &str = "    ";

/// Compact view: one info line and a bar of MFU, MRU and other ARC usage scaled to c_max
pub fn render_graphic(arc: &SectionStats) -> ZfsResult<String> {
    let size = ArcSize::from_stats(arc)?;
    let bar = ProgressBar::new(GRAPH_WIDTH);

    let info = format!(
        "ARC: {} ({})  MFU: {}  MRU: {}",
        format_bytes(size.size),
        size.size_percent(),
        format_bytes(size.mfu),
        format_bytes(size.mru),
    );

    let segments = if size.max == 0 {
        Vec::new()
    } else {
        let max = size.max as f64;
        let other = size.size.saturating_sub(size.mfu.saturating_add(size.mru));
        vec![
            ('F', size.mfu as f64 / max),
            ('R', size.mru as f64 / max),
            ('O', other as f64 / max),
        ]
    };

    let rule = format!("{}{}", GRAPH_INDENT, bar.rule());
    let lines = [
        String::new(),
        format!("{}{:^width$}", GRAPH_INDENT, info, width = GRAPH_WIDTH)
            .trim_end()
            .to_string(),
        rule.clone(),
        format!("{}{}", GRAPH_INDENT, bar.render(&segments)),
        rule,
        format!("{}F = MFU  R = MRU  O = other", GRAPH_INDENT),
        String::new(),
    ];

    Ok(lines.join("\n") + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::stats;

    fn arc(size: u64, max: u64, mfu: u64, mru: u64) -> SectionStats {
        stats(
            "arc",
            &[
                ("size", size),
                ("c", max),
                ("c_min", 1),
                ("c_max", max),
                ("mfu_size", mfu),
                ("mru_size", mru),
                ("memory_throttle_count", 0),
            ],
        )
    }

    #[test]
    fn test_graphic_bar_segments() {
        // 58 inner columns: MFU 29, MRU 11, other 5
        let out = render_graphic(&arc(800, 1000, 500, 200)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("ARC: 800 Bytes (80.0 %)  MFU: 500 Bytes  MRU: 200 Bytes"));
        assert_eq!(lines[2], format!("    +{}+", "-".repeat(58)));
        let expected_bar = format!(
            "    |{}{}{}{}|",
            "F".repeat(29),
            "R".repeat(11),
            "O".repeat(5),
            " ".repeat(13)
        );
        assert_eq!(lines[3], expected_bar);
        assert_eq!(lines[4], lines[2]);
    }

    #[test]
    fn test_graphic_with_zero_max() {
        let out = render_graphic(&arc(0, 0, 0, 0)).unwrap();
        assert!(out.contains(&format!("|{}|", " ".repeat(58))));
        assert!(out.contains("n/a"));
    }
}
