//! Report assembly: turns collected statistics into the text printed to the console

pub mod arc;
pub mod graphic;
pub mod l2arc;
pub mod layout;
pub mod raw;
pub mod subsystems;
pub mod tunables;

use crate::config::{DisplayMode, ReportConfig};
use crate::display::Terminal;
use crate::system::{CommandExecutor, FilesystemReader};
use crate::zfs::{KstatCollector, Section, SectionStats, Tunables, ZfsError, ZfsResult};
use layout::LINE_LEN;
use raw::RawSection;
use tracing::{info, warn};

const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Facts about the host printed above every report
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub timestamp: String,
    pub hostname: String,
    pub arch: String,
    pub zfs_version: Option<String>,
    pub spl_version: Option<String>,
}

impl HeaderInfo {
    pub fn gather<E: CommandExecutor, F: FilesystemReader>(collector: &KstatCollector<E, F>) -> Self {
        let (hostname, arch) = match nix::sys::utsname::uname() {
            Ok(uts) => (
                uts.nodename().to_string_lossy().into_owned(),
                uts.machine().to_string_lossy().into_owned(),
            ),
            Err(e) => {
                warn!(error = %e, "uname failed");
                ("unknown".to_string(), "unknown".to_string())
            }
        };

        Self {
            timestamp: chrono::Local::now().format(DATE_FORMAT).to_string(),
            hostname,
            arch,
            zfs_version: collector.module_version("zfs"),
            spl_version: collector.module_version("spl"),
        }
    }
}

pub fn render_header(info: &HeaderInfo) -> String {
    let rule = "-".repeat(LINE_LEN);
    let title = "ZFS Subsystem Report";
    let mut out = format!(
        "\n{}\n{}{:>width$}\n",
        rule,
        title,
        info.timestamp,
        width = LINE_LEN - title.len()
    );

    out.push_str(&format!("Machine: {} ({})", info.hostname, info.arch));
    if let Some(version) = &info.zfs_version {
        out.push_str(&format!("  ZFS: {}", version));
    }
    if let Some(version) = &info.spl_version {
        out.push_str(&format!("  SPL: {}", version));
    }
    out.push_str(&format!("\n{}\n\n", rule));
    out
}

/// Header followed by the body selected in `config`
pub async fn run<E: CommandExecutor, F: FilesystemReader>(
    config: &ReportConfig,
    collector: &KstatCollector<E, F>,
    terminal: &Terminal,
) -> ZfsResult<String> {
    // Fail before printing anything if ZFS is not loaded at all
    let arc_file = Section::Arc.kstat_file().unwrap_or("arcstats");
    if !collector.has_kstat(arc_file) {
        return Err(ZfsError::subsystem_unavailable(
            "ARC",
            &format!("{} not found, is the zfs module loaded?", collector.kstat_file_path(arc_file)),
        ));
    }

    let body = build_report(config, collector, terminal).await?;
    let header = render_header(&HeaderInfo::gather(collector));
    Ok(header + &body)
}

/// Everything below the header, for the configured display mode
pub async fn build_report<E: CommandExecutor, F: FilesystemReader>(
    config: &ReportConfig,
    collector: &KstatCollector<E, F>,
    terminal: &Terminal,
) -> ZfsResult<String> {
    info!(mode = ?config.mode, section = ?config.section, "building report");

    match config.mode {
        DisplayMode::Raw => build_raw(collector),
        DisplayMode::Graphic => {
            let arc = require_section(collector, Section::Arc)?;
            graphic::render_graphic(&arc)
        }
        DisplayMode::Report => {
            let values = if config.wants_tunables() {
                Some(
                    collector
                        .collect_tunables_with_descriptions(config.wants_descriptions())
                        .await?,
                )
            } else {
                None
            };

            let mut out = String::new();
            for section in config.sections() {
                out.push_str(&render_section(
                    section,
                    config,
                    collector,
                    values.as_ref(),
                    terminal,
                )?);
            }
            Ok(out)
        }
    }
}

fn render_section<E: CommandExecutor, F: FilesystemReader>(
    section: Section,
    config: &ReportConfig,
    collector: &KstatCollector<E, F>,
    values: Option<&Tunables>,
    terminal: &Terminal,
) -> ZfsResult<String> {
    let Some(file) = section.kstat_file() else {
        return Ok(match values {
            Some(values) => tunables::render_tunables(values, config.tunables_layout, terminal),
            None => String::new(),
        });
    };

    // Newer modules dropped some kstats; only arcstats and a section the user asked for must exist
    let required = matches!(section, Section::Arc | Section::L2arc) || config.is_explicit(section);
    if !required && !collector.has_kstat(file) {
        warn!(section = %section, file, "kstat not exported, skipping section");
        return Ok(format!(
            "{} statistics not available on this system, skipping section\n\n",
            section
        ));
    }

    let stats = require_section(collector, section)?;
    match section {
        Section::Arc => Ok(arc::render_arc_summary(&stats, terminal)?
            + &arc::render_arc_efficiency(&stats, terminal)?),
        Section::L2arc => l2arc::render_l2arc(&stats, terminal),
        Section::Dmu => subsystems::render_dmu(&stats, terminal),
        Section::Vdev => subsystems::render_vdev(&stats, terminal),
        Section::Xuio => subsystems::render_xuio(&stats, terminal),
        Section::Zfetch => subsystems::render_zfetch(&stats, terminal),
        Section::Zil => subsystems::render_zil(&stats, terminal),
        Section::Tunables => Ok(String::new()),
    }
}

fn require_section<E: CommandExecutor, F: FilesystemReader>(
    collector: &KstatCollector<E, F>,
    section: Section,
) -> ZfsResult<SectionStats> {
    if let Some(file) = section.kstat_file() {
        if !collector.has_kstat(file) {
            return Err(ZfsError::subsystem_unavailable(
                section.name(),
                &format!("{} not found", collector.kstat_file_path(file)),
            ));
        }
    }

    collector
        .collect_section(section)?
        .ok_or_else(|| ZfsError::subsystem_unavailable(section.name(), "no kstat file"))
}

fn build_raw<E: CommandExecutor, F: FilesystemReader>(
    collector: &KstatCollector<E, F>,
) -> ZfsResult<String> {
    let mut files: Vec<&str> = Section::REPORT_ORDER
        .iter()
        .filter_map(|section| section.kstat_file())
        .collect();
    files.sort_unstable();
    files.dedup();

    let mut sections = Vec::with_capacity(files.len());
    for file in files {
        if !collector.has_kstat(file) {
            warn!(file, "kstat not exported, leaving it out of the raw dump");
            continue;
        }
        sections.push(RawSection {
            path: collector.kstat_file_path(file),
            lines: collector.read_kstat_lines(file)?,
        });
    }

    let values = collector.collect_tunables()?;
    Ok(raw::render_raw(
        &sections,
        Some((collector.tunables_path(), &values)),
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::zfs::SectionStats;
    use crate::zfs::kstat::build_section_map;

    /// Section map from (name, value) pairs, as if read from a kstat file
    pub fn stats(section: &str, pairs: &[(&str, u64)]) -> SectionStats {
        let lines: Vec<String> = pairs
            .iter()
            .map(|(name, value)| format!("{} 4 {}", name, value))
            .collect();
        build_section_map(section, lines.as_slice()).unwrap()
    }
}
