//! Derived metrics computed from raw section statistics

use super::error::ZfsResult;
use super::kstat::SectionStats;
use crate::display::format_percent_u64;

/// ARC health as reported by the memory throttle counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcHealth {
    Healthy,
    Throttled,
}

impl ArcHealth {
    /// Healthy only while the throttle counter reads zero
    pub fn from_throttle_count(count: u64) -> Self {
        if count == 0 {
            ArcHealth::Healthy
        } else {
            ArcHealth::Throttled
        }
    }

    pub fn is_healthy(self) -> bool {
        self == ArcHealth::Healthy
    }
}

impl std::fmt::Display for ArcHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ArcHealth::Healthy => write!(f, "HEALTHY"),
            ArcHealth::Throttled => write!(f, "THROTTLED"),
        }
    }
}

/// L2ARC device health, degraded by any I/O, checksum or write error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum L2Health {
    Healthy,
    Degraded,
}

impl L2Health {
    pub fn from_error_counts(errors: &[u64]) -> Self {
        if errors.iter().all(|&count| count == 0) {
            L2Health::Healthy
        } else {
            L2Health::Degraded
        }
    }

    pub fn is_healthy(self) -> bool {
        self == L2Health::Healthy
    }
}

impl std::fmt::Display for L2Health {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            L2Health::Healthy => write!(f, "HEALTHY"),
            L2Health::Degraded => write!(f, "DEGRADED"),
        }
    }
}

/// ARC size figures (bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSize {
    pub size: u64,
    pub target: u64,
    pub min: u64,
    pub max: u64,
    pub mfu: u64,
    pub mru: u64,
    pub throttle_count: u64,
}

impl ArcSize {
    pub fn from_stats(arc: &SectionStats) -> ZfsResult<Self> {
        Ok(Self {
            size: arc.value("size")?,
            target: arc.value("c")?,
            min: arc.value("c_min")?,
            max: arc.value("c_max")?,
            mfu: arc.value("mfu_size")?,
            mru: arc.value("mru_size")?,
            throttle_count: arc.value("memory_throttle_count")?,
        })
    }

    pub fn health(&self) -> ArcHealth {
        ArcHealth::from_throttle_count(self.throttle_count)
    }

    /// Current size as a share of the maximum size
    pub fn size_percent(&self) -> String {
        format_percent_u64(self.size, self.max)
    }

    /// MFU share of MFU + MRU, not of total ARC size
    pub fn mfu_percent(&self) -> String {
        format_percent_u64(self.mfu, self.mfu_mru_total())
    }

    /// MRU share of MFU + MRU, not of total ARC size
    pub fn mru_percent(&self) -> String {
        format_percent_u64(self.mru, self.mfu_mru_total())
    }

    fn mfu_mru_total(&self) -> u64 {
        self.mfu.saturating_add(self.mru)
    }
}

/// Vdev cache counters and their ratios against delegations + hits + misses
#[derive(Debug, Clone, PartialEq)]
pub struct VdevCacheRatios {
    pub delegations: u64,
    pub hits: u64,
    pub misses: u64,
}

impl VdevCacheRatios {
    pub fn from_stats(vdev: &SectionStats) -> ZfsResult<Self> {
        Ok(Self {
            delegations: vdev.value("delegations")?,
            hits: vdev.value("hits")?,
            misses: vdev.value("misses")?,
        })
    }

    pub fn total(&self) -> u64 {
        self.delegations
            .saturating_add(self.hits)
            .saturating_add(self.misses)
    }

    pub fn hit_percent(&self) -> String {
        format_percent_u64(self.hits, self.total())
    }

    pub fn miss_percent(&self) -> String {
        format_percent_u64(self.misses, self.total())
    }

    pub fn delegation_percent(&self) -> String {
        format_percent_u64(self.delegations, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PERCENT_PLACEHOLDER;
    use crate::zfs::kstat::build_section_map;

    fn arc_stats(throttle: &str, mfu: &str, mru: &str) -> SectionStats {
        let lines = vec![
            "size 4 512".to_string(),
            "c 4 1024".to_string(),
            "c_min 4 128".to_string(),
            "c_max 4 1024".to_string(),
            format!("mfu_size 4 {}", mfu),
            format!("mru_size 4 {}", mru),
            format!("memory_throttle_count 4 {}", throttle),
        ];
        build_section_map("arc", lines.as_slice()).unwrap()
    }

    #[test]
    fn test_arc_health_from_throttle_count() {
        assert_eq!(ArcHealth::from_throttle_count(0), ArcHealth::Healthy);
        assert_eq!(ArcHealth::from_throttle_count(3), ArcHealth::Throttled);
        assert_eq!(ArcHealth::Healthy.to_string(), "HEALTHY");
        assert_eq!(ArcHealth::Throttled.to_string(), "THROTTLED");
    }

    #[test]
    fn test_arc_size_percentages() {
        let size = ArcSize::from_stats(&arc_stats("0", "300", "100")).unwrap();
        assert!(size.health().is_healthy());
        assert_eq!(size.size_percent(), "50.0 %");
        // Relative to mfu + mru (400), not to the ARC size (512)
        assert_eq!(size.mfu_percent(), "75.0 %");
        assert_eq!(size.mru_percent(), "25.0 %");
    }

    #[test]
    fn test_arc_size_empty_sub_caches() {
        let size = ArcSize::from_stats(&arc_stats("7", "0", "0")).unwrap();
        assert_eq!(size.health(), ArcHealth::Throttled);
        assert_eq!(size.mfu_percent(), PERCENT_PLACEHOLDER);
        assert_eq!(size.mru_percent(), PERCENT_PLACEHOLDER);
    }

    #[test]
    fn test_arc_size_missing_field() {
        let stats = build_section_map("arc", &["size 4 1"]).unwrap();
        assert!(ArcSize::from_stats(&stats).is_err());
    }

    #[test]
    fn test_vdev_ratios() {
        let stats =
            build_section_map("vdev", &["delegations 4 10", "hits 4 60", "misses 4 30"]).unwrap();
        let ratios = VdevCacheRatios::from_stats(&stats).unwrap();
        assert_eq!(ratios.total(), 100);
        assert_eq!(ratios.hit_percent(), "60.0 %");
        assert_eq!(ratios.miss_percent(), "30.0 %");
        assert_eq!(ratios.delegation_percent(), "10.0 %");
    }

    #[test]
    fn test_vdev_ratios_all_zero() {
        let stats =
            build_section_map("vdev", &["delegations 4 0", "hits 4 0", "misses 4 0"]).unwrap();
        let ratios = VdevCacheRatios::from_stats(&stats).unwrap();
        assert_eq!(ratios.hit_percent(), PERCENT_PLACEHOLDER);
        assert_eq!(ratios.delegation_percent(), PERCENT_PLACEHOLDER);
    }

    #[test]
    fn test_l2_health() {
        assert_eq!(L2Health::from_error_counts(&[0, 0, 0]), L2Health::Healthy);
        assert_eq!(L2Health::from_error_counts(&[0, 2, 0]), L2Health::Degraded);
        assert_eq!(L2Health::Degraded.to_string(), "DEGRADED");
    }
}
