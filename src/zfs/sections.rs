use super::error::ZfsError;
use std::fmt;
use std::str::FromStr;

/// Names accepted by `-s`, in the order they are listed to the user
pub const SECTION_NAMES: [&str; 8] = [
    "arc", "dmu", "l2arc", "tunables", "vdev", "xuio", "zfetch", "zil",
];

/// True iff `name` is one of the fixed section identifiers (case-sensitive)
pub fn is_known_section(name: &str) -> bool {
    SECTION_NAMES.contains(&name)
}

/// One named category of statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Arc,
    Dmu,
    L2arc,
    Tunables,
    Vdev,
    Xuio,
    Zfetch,
    Zil,
}

impl Section {
    /// Order of sections in the full report
    pub const REPORT_ORDER: [Section; 8] = [
        Section::Arc,
        Section::L2arc,
        Section::Dmu,
        Section::Zfetch,
        Section::Vdev,
        Section::Xuio,
        Section::Zil,
        Section::Tunables,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Arc => "arc",
            Section::Dmu => "dmu",
            Section::L2arc => "l2arc",
            Section::Tunables => "tunables",
            Section::Vdev => "vdev",
            Section::Xuio => "xuio",
            Section::Zfetch => "zfetch",
            Section::Zil => "zil",
        }
    }

    /// File under the kstat directory that holds this section's data.
    /// L2ARC counters live in arcstats; tunables are not a kstat at all.
    pub fn kstat_file(self) -> Option<&'static str> {
        match self {
            Section::Arc | Section::L2arc => Some("arcstats"),
            Section::Dmu => Some("dmu_tx"),
            Section::Vdev => Some("vdev_cache_stats"),
            Section::Xuio => Some("xuio_stats"),
            Section::Zfetch => Some("zfetchstats"),
            Section::Zil => Some("zil"),
            Section::Tunables => None,
        }
    }
}

impl FromStr for Section {
    type Err = ZfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_known_section(s) {
            return Err(ZfsError::UnknownSection(s.to_string()));
        }
        Ok(match s {
            "arc" => Section::Arc,
            "dmu" => Section::Dmu,
            "l2arc" => Section::L2arc,
            "tunables" => Section::Tunables,
            "vdev" => Section::Vdev,
            "xuio" => Section::Xuio,
            "zfetch" => Section::Zfetch,
            _ => Section::Zil,
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sections() {
        for name in SECTION_NAMES {
            assert!(is_known_section(name), "{} should be known", name);
        }
    }

    #[test]
    fn test_unknown_sections() {
        assert!(!is_known_section(""));
        assert!(!is_known_section("ARC"));
        assert!(!is_known_section("Zil"));
        assert!(!is_known_section("ZFS"));
        assert!(!is_known_section("So say we all"));
        assert!(!is_known_section(" arc"));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for name in SECTION_NAMES {
            let section: Section = name.parse().unwrap();
            assert_eq!(section.name(), name);
            assert_eq!(section.to_string(), name);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let result = "l2ARC".parse::<Section>();
        assert!(matches!(result, Err(ZfsError::UnknownSection(name)) if name == "l2ARC"));
    }

    #[test]
    fn test_kstat_files() {
        assert_eq!(Section::Arc.kstat_file(), Some("arcstats"));
        assert_eq!(Section::L2arc.kstat_file(), Some("arcstats"));
        assert_eq!(Section::Vdev.kstat_file(), Some("vdev_cache_stats"));
        assert_eq!(Section::Tunables.kstat_file(), None);
    }

    #[test]
    fn test_report_order_covers_every_section() {
        let mut names: Vec<&str> = Section::REPORT_ORDER.iter().map(|s| s.name()).collect();
        names.sort();
        assert_eq!(names, SECTION_NAMES.to_vec());
    }
}
