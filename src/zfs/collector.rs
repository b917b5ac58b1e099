use super::error::{ZfsError, ZfsResult};
use super::kstat::{SectionStats, build_section_map, data_lines};
use super::sections::Section;
use super::tunables::{Tunables, parse_parameter_descriptions};
use crate::system::{CommandExecutor, FilesystemReader};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

const MODINFO_TIMEOUT: Duration = Duration::from_secs(5);
const MODINFO_COMMANDS: [&str; 2] = ["modinfo", "/sbin/modinfo"];
const MODINFO_ARGS: [&str; 3] = ["-F", "parm", "zfs"];
const DEFAULT_MODULE_ROOT: &str = "/sys/module";

/// Loads kstat sections, tunables and module descriptions through the system abstractions
pub struct KstatCollector<E: CommandExecutor, F: FilesystemReader> {
    command_executor: E,
    filesystem_reader: F,
    kstat_path: String,
    tunables_path: String,
}

impl<E: CommandExecutor, F: FilesystemReader> KstatCollector<E, F> {
    pub fn new(
        command_executor: E,
        filesystem_reader: F,
        kstat_path: &str,
        tunables_path: &str,
    ) -> Self {
        Self {
            command_executor,
            filesystem_reader,
            kstat_path: kstat_path.trim_end_matches('/').to_string(),
            tunables_path: tunables_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn kstat_file_path(&self, file: &str) -> String {
        format!("{}/{}", self.kstat_path, file)
    }

    pub fn tunables_path(&self) -> &str {
        &self.tunables_path
    }

    /// Whether the kernel exports this kstat file at all
    pub fn has_kstat(&self, file: &str) -> bool {
        self.filesystem_reader.exists(&self.kstat_file_path(file))
    }

    /// Data lines of one kstat file, header stripped and sorted
    pub fn read_kstat_lines(&self, file: &str) -> ZfsResult<Vec<String>> {
        let path = self.kstat_file_path(file);
        debug!(path = %path, "reading kstat file");

        let content = self
            .filesystem_reader
            .read_to_string(&path)
            .map_err(|e| ZfsError::filesystem_error(&path, "read", &e.to_string()))?;

        data_lines(&path, &content)
    }

    /// Name/value map for a section; `None` for sections without a kstat file
    pub fn collect_section(&self, section: Section) -> ZfsResult<Option<SectionStats>> {
        let Some(file) = section.kstat_file() else {
            return Ok(None);
        };

        let lines = self.read_kstat_lines(file)?;
        let stats = build_section_map(section.name(), lines.as_slice())?;
        if stats.is_empty() {
            warn!(section = stats.section(), file, "kstat file holds no statistics");
        }
        debug!(section = stats.section(), statistics = stats.len(), "parsed section");
        Ok(Some(stats))
    }

    /// Current value of every module parameter
    pub fn collect_tunables(&self) -> ZfsResult<Tunables> {
        let names = self
            .filesystem_reader
            .list_dir(&self.tunables_path)
            .map_err(|e| ZfsError::filesystem_error(&self.tunables_path, "list", &e.to_string()))?;

        let mut values = BTreeMap::new();
        for name in names {
            let path = format!("{}/{}", self.tunables_path, name);
            let value = self
                .filesystem_reader
                .read_to_string(&path)
                .map_err(|e| ZfsError::filesystem_error(&path, "read", &e.to_string()))?;
            values.insert(name, value.trim().to_string());
        }

        let tunables = Tunables::new(values);
        debug!(count = tunables.len(), "collected tunables");
        Ok(tunables)
    }

    /// Parameter descriptions from modinfo, trying each known location in turn
    pub async fn collect_descriptions(&self) -> ZfsResult<BTreeMap<String, String>> {
        let mut last_error = None;

        for command in MODINFO_COMMANDS {
            match self
                .command_executor
                .execute_with_timeout(command, &MODINFO_ARGS, MODINFO_TIMEOUT)
                .await
            {
                Ok(output) => return Ok(parse_parameter_descriptions(&output)),
                Err(e) => {
                    warn!(command, error = %e, "module description query failed");
                    last_error = Some(ZfsError::command_error(command, &MODINFO_ARGS, &e.to_string()));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ZfsError::subsystem_unavailable("modinfo", "no command to query descriptions")
        }))
    }

    /// Tunables, with descriptions attached when asked for and obtainable
    pub async fn collect_tunables_with_descriptions(&self, descriptions: bool) -> ZfsResult<Tunables> {
        let tunables = self.collect_tunables()?;
        if !descriptions {
            return Ok(tunables);
        }

        match self.collect_descriptions().await {
            Ok(found) => {
                let tunables = tunables.with_descriptions(found);
                if !tunables.has_descriptions() {
                    warn!("modinfo listed no parameter descriptions");
                }
                Ok(tunables)
            }
            Err(e) => {
                warn!(error = %e, "printing tunables without descriptions");
                Ok(tunables)
            }
        }
    }

    /// Directory holding one entry per loaded module, two levels above the tunables
    fn module_root(&self) -> &str {
        Path::new(&self.tunables_path)
            .parent()
            .and_then(Path::parent)
            .and_then(Path::to_str)
            .filter(|root| !root.is_empty())
            .unwrap_or(DEFAULT_MODULE_ROOT)
    }

    /// Version string of a loaded kernel module, e.g. "zfs" or "spl"
    pub fn module_version(&self, module: &str) -> Option<String> {
        let path = format!("{}/{}/version", self.module_root(), module);
        self.filesystem_reader
            .read_to_string(&path)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
