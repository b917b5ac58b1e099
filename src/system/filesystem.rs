use crate::demo::data::{DEMO_SPL_VERSION, DEMO_TUNABLES, DEMO_ZFS_VERSION};
use std::error::Error;

const DEMO_KSTAT_DIR: &str = "/proc/spl/kstat/zfs/";
const DEMO_TUNABLES_DIR: &str = "/sys/module/zfs/parameters";

/// Abstraction for filesystem access to enable testing without real files
pub trait FilesystemReader {
    fn read_to_string(&self, path: &str) -> Result<String, Box<dyn Error>>;
    fn exists(&self, path: &str) -> bool;
    /// Names of the regular files directly inside `path`
    fn list_dir(&self, path: &str) -> Result<Vec<String>, Box<dyn Error>>;
}

/// Real filesystem reader using std::fs
pub struct RealFilesystemReader;

impl FilesystemReader for RealFilesystemReader {
    fn read_to_string(&self, path: &str) -> Result<String, Box<dyn Error>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn exists(&self, path: &str) -> bool {
        std::path::Path::new(path).exists()
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// Demo filesystem reader that returns predefined file contents
pub struct DemoFilesystemReader;

impl DemoFilesystemReader {
    fn get_demo_content(&self, path: &str) -> Option<&'static str> {
        if let Some(name) = path.strip_prefix(DEMO_KSTAT_DIR) {
            return match name {
                "arcstats" => Some(include_str!("../demo/arcstats.txt")),
                "dmu_tx" => Some(include_str!("../demo/dmu_tx.txt")),
                "vdev_cache_stats" => Some(include_str!("../demo/vdev_cache_stats.txt")),
                "xuio_stats" => Some(include_str!("../demo/xuio_stats.txt")),
                "zfetchstats" => Some(include_str!("../demo/zfetchstats.txt")),
                "zil" => Some(include_str!("../demo/zil.txt")),
                _ => None,
            };
        }

        if let Some(name) = path
            .strip_prefix(DEMO_TUNABLES_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            return DEMO_TUNABLES
                .iter()
                .find(|(tunable, _)| *tunable == name)
                .map(|(_, value)| *value);
        }

        match path {
            "/sys/module/zfs/version" => Some(DEMO_ZFS_VERSION),
            "/sys/module/spl/version" => Some(DEMO_SPL_VERSION),
            _ => None,
        }
    }
}

impl FilesystemReader for DemoFilesystemReader {
    fn read_to_string(&self, path: &str) -> Result<String, Box<dyn Error>> {
        if let Some(content) = self.get_demo_content(path) {
            Ok(content.to_string())
        } else {
            Err(format!("Demo: File not mocked: {}", path).into())
        }
    }

    fn exists(&self, path: &str) -> bool {
        path == DEMO_TUNABLES_DIR || self.get_demo_content(path).is_some()
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, Box<dyn Error>> {
        if path == DEMO_TUNABLES_DIR {
            Ok(DEMO_TUNABLES
                .iter()
                .map(|(name, _)| name.to_string())
                .collect())
        } else {
            Err(format!("Demo: Directory not mocked: {}", path).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_real_reader_lists_only_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zfs_arc_max"), "0\n").unwrap();
        fs::write(dir.path().join("zfs_arc_min"), "0\n").unwrap();
        fs::create_dir(dir.path().join("holders")).unwrap();

        let reader = RealFilesystemReader;
        let path = dir.path().to_str().unwrap();
        let mut names = reader.list_dir(path).unwrap();
        names.sort();

        assert_eq!(names, vec!["zfs_arc_max", "zfs_arc_min"]);
        assert!(reader.exists(path));
        assert_eq!(
            reader
                .read_to_string(dir.path().join("zfs_arc_max").to_str().unwrap())
                .unwrap(),
            "0\n"
        );
    }

    #[test]
    fn test_real_reader_missing_path() {
        let reader = RealFilesystemReader;
        assert!(!reader.exists("/nonexistent/arcstats"));
        assert!(reader.read_to_string("/nonexistent/arcstats").is_err());
        assert!(reader.list_dir("/nonexistent").is_err());
    }

    #[test]
    fn test_demo_reader_serves_kstats_and_tunables() {
        let reader = DemoFilesystemReader;
        assert!(reader.exists("/proc/spl/kstat/zfs/arcstats"));
        assert!(!reader.exists("/proc/spl/kstat/zfs/nothing"));

        let arcstats = reader.read_to_string("/proc/spl/kstat/zfs/arcstats").unwrap();
        assert!(arcstats.contains("memory_throttle_count"));

        let names = reader.list_dir("/sys/module/zfs/parameters").unwrap();
        assert!(names.contains(&"zfs_arc_max".to_string()));
        assert!(reader
            .read_to_string("/sys/module/zfs/parameters/zfs_arc_max")
            .is_ok());
    }

    #[test]
    fn test_demo_reader_unknown_file() {
        let reader = DemoFilesystemReader;
        let err = reader.read_to_string("/etc/hostname").unwrap_err();
        assert!(err.to_string().contains("not mocked"));
    }
}
