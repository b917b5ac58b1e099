//! Resolved, immutable configuration for one report invocation

use crate::zfs::Section;

pub const DEFAULT_KSTAT_PATH: &str = "/proc/spl/kstat/zfs";
pub const DEFAULT_TUNABLES_PATH: &str = "/sys/module/zfs/parameters";

/// Which view of the statistics to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Human-readable report, one block per section
    Report,
    /// Raw but sorted kstat lines
    Raw,
    /// Compact ARC bar graph
    Graphic,
}

/// How tunables are laid out in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunablesLayout {
    Columns,
    /// `name=value`, one per line
    Alternate,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub kstat_path: String,
    pub tunables_path: String,
    pub mode: DisplayMode,
    pub section: Option<Section>,
    pub tunables_layout: TunablesLayout,
    pub descriptions: bool,
    pub demo_mode: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            kstat_path: DEFAULT_KSTAT_PATH.to_string(),
            tunables_path: DEFAULT_TUNABLES_PATH.to_string(),
            mode: DisplayMode::Report,
            section: None,
            tunables_layout: TunablesLayout::Columns,
            descriptions: false,
            demo_mode: false,
        }
    }
}

impl ReportConfig {
    /// Raw output wins over graphic, which wins over the sectioned report
    pub fn display_mode(raw: bool, graphic: bool) -> DisplayMode {
        if raw {
            DisplayMode::Raw
        } else if graphic {
            DisplayMode::Graphic
        } else {
            DisplayMode::Report
        }
    }

    /// Sections to render in report mode
    pub fn sections(&self) -> Vec<Section> {
        match self.section {
            Some(section) => vec![section],
            None => Section::REPORT_ORDER.to_vec(),
        }
    }

    pub fn is_explicit(&self, section: Section) -> bool {
        self.section == Some(section)
    }

    pub fn wants_tunables(&self) -> bool {
        match self.mode {
            DisplayMode::Raw => true,
            DisplayMode::Graphic => false,
            DisplayMode::Report => self.sections().contains(&Section::Tunables),
        }
    }

    pub fn wants_descriptions(&self) -> bool {
        self.descriptions && self.mode == DisplayMode::Report && self.wants_tunables()
    }
}
