//! Parsing of kstat text as exported under /proc/spl/kstat/zfs

use super::error::{ZfsError, ZfsResult};
use std::collections::HashMap;

/// Kstat files start with a two line header ("<id> <type> ..." and "name type data")
const HEADER_LINES: usize = 2;

/// Statistic name to raw value for one section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionStats {
    section: String,
    values: HashMap<String, String>,
}

impl SectionStats {
    pub fn new(section: &str) -> Self {
        Self {
            section: section.to_string(),
            values: HashMap::new(),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn insert(&mut self, name: String, value: String) {
        self.values.insert(name, value);
    }

    /// Raw string value, exactly as the kernel wrote it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Required statistic parsed as u64
    pub fn value(&self, name: &str) -> ZfsResult<u64> {
        match self.get(name) {
            Some(raw) => parse_u64(&self.section, name, raw),
            None => Err(ZfsError::missing_statistic(&self.section, name)),
        }
    }

    /// Statistic that only some ZFS versions export
    pub fn optional(&self, name: &str) -> ZfsResult<Option<u64>> {
        self.get(name)
            .map(|raw| parse_u64(&self.section, name, raw))
            .transpose()
    }

    /// Sum of several required statistics
    pub fn sum(&self, names: &[&str]) -> ZfsResult<u64> {
        names
            .iter()
            .try_fold(0u64, |acc, name| Ok(acc.saturating_add(self.value(name)?)))
    }

    /// Names in alphabetical order
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split one "<name> <type> <value>" record, discarding the type column
pub fn parse_stat_line(line: &str) -> ZfsResult<(String, String)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(_type_tag), Some(value)) => Ok((name.to_string(), value.to_string())),
        _ => Err(ZfsError::invalid_format(
            "'<name> <type> <value>'",
            line,
            "kstat record",
        )),
    }
}

/// Build the name/value map for one section; later duplicates overwrite earlier ones
pub fn build_section_map<S: AsRef<str>>(section: &str, lines: &[S]) -> ZfsResult<SectionStats> {
    let mut stats = SectionStats::new(section);
    for line in lines {
        let (name, value) = parse_stat_line(line.as_ref())?;
        stats.insert(name, value);
    }
    Ok(stats)
}

/// Strip the kstat header and return the data lines sorted alphabetically
pub fn data_lines(source: &str, content: &str) -> ZfsResult<Vec<String>> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < HEADER_LINES {
        return Err(ZfsError::invalid_format(
            "a two line kstat header",
            &format!("{} lines", lines.len()),
            source,
        ));
    }

    let mut data: Vec<String> = lines[HEADER_LINES..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect();
    data.sort();
    Ok(data)
}

fn parse_u64(section: &str, name: &str, raw: &str) -> ZfsResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        ZfsError::parse_error(
            &format!("{} statistic '{}'", section, name),
            raw,
            "not an unsigned 64-bit integer",
        )
    })
}
