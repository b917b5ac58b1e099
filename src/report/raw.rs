use crate::zfs::Tunables;

/// Sorted kstat lines of one file, keyed by its full path
pub struct RawSection {
    pub path: String,
    pub lines: Vec<String>,
}

/// Every kstat file as read, plus the tunables directory, without interpretation
pub fn render_raw(sections: &[RawSection], tunables: Option<(&str, &Tunables)>) -> String {
    let mut out = String::new();

    let mut ordered: Vec<&RawSection> = sections.iter().collect();
    ordered.sort_by(|a, b| a.path.cmp(&b.path));

    for section in ordered {
        out.push_str(&format!("\n{}\n", section.path));
        for line in &section.lines {
            out.push_str(&format!("\t {}\n", line));
        }
    }

    if let Some((path, tunables)) = tunables {
        out.push_str(&format!("\n{}\n", path));
        for (name, value) in tunables.iter() {
            out.push_str(&format!("\t {} {}\n", name, value));
        }
    }

    out
}
