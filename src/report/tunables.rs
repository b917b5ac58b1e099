use super::layout::ReportWriter;
use crate::config::TunablesLayout;
use crate::display::Terminal;
use crate::zfs::Tunables;

const NAME_WIDTH: usize = 50;

/// Module parameters, optionally preceded by their descriptions
pub fn render_tunables(tunables: &Tunables, layout: TunablesLayout, terminal: &Terminal) -> String {
    let mut w = ReportWriter::new(terminal);
    w.heading("ZFS tunables:");

    if tunables.is_empty() {
        w.text("    No tunables found");
        w.blank();
        return w.finish();
    }

    for (name, value) in tunables.iter() {
        if let Some(description) = tunables.description(name) {
            w.text(&format!("    # {}", description));
        }
        let line = match layout {
            TunablesLayout::Columns => format!("    {:<width$} {}", name, value, width = NAME_WIDTH),
            TunablesLayout::Alternate => format!("    {}={}", name, value),
        };
        w.text(line.trim_end());
    }
    w.blank();

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zfs::tunables::parse_parameter_descriptions;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn sample() -> Tunables {
        let mut values = BTreeMap::new();
        values.insert("zfs_arc_min".to_string(), "0".to_string());
        values.insert("zfs_arc_max".to_string(), "8589934592".to_string());
        Tunables::new(values)
    }

    #[test]
    fn test_columns_layout() {
        let out = render_tunables(&sample(), TunablesLayout::Columns, &Terminal::plain());
        let expected = format!(
            "ZFS tunables:\n    {:<50} 8589934592\n    {:<50} 0\n\n",
            "zfs_arc_max", "zfs_arc_min"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_alternate_layout() {
        let out = render_tunables(&sample(), TunablesLayout::Alternate, &Terminal::plain());
        assert_eq!(
            out,
            "ZFS tunables:\n    zfs_arc_max=8589934592\n    zfs_arc_min=0\n\n"
        );
    }

    #[test]
    fn test_descriptions_precede_values() {
        let tunables = sample().with_descriptions(parse_parameter_descriptions(
            "zfs_arc_max:Max arc size (ulong)\n",
        ));
        let out = render_tunables(&tunables, TunablesLayout::Alternate, &Terminal::plain());
        assert_eq!(
            out,
            "ZFS tunables:\n    # Max arc size (ulong)\n    zfs_arc_max=8589934592\n    zfs_arc_min=0\n\n"
        );
    }

    #[test]
    fn test_empty_tunables() {
        let out = render_tunables(&Tunables::default(), TunablesLayout::Columns, &Terminal::plain());
        assert!(out.contains("No tunables found"));
    }
}
