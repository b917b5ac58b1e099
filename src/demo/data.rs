/// Demo module parameters (name, file content) as found under /sys/module/zfs/parameters
pub const DEMO_TUNABLES: &[(&str, &str)] = &[
    ("l2arc_feed_again", "1\n"),
    ("l2arc_headroom", "2\n"),
    ("l2arc_noprefetch", "1\n"),
    ("l2arc_write_max", "8388608\n"),
    ("zfs_arc_max", "0\n"),
    ("zfs_arc_meta_limit", "0\n"),
    ("zfs_arc_min", "0\n"),
    ("zfs_dirty_data_max_percent", "10\n"),
    ("zfs_prefetch_disable", "0\n"),
    ("zfs_txg_timeout", "5\n"),
    ("zfs_vdev_cache_size", "0\n"),
    ("zil_replay_disable", "0\n"),
];

pub const DEMO_ZFS_VERSION: &str = "0.8.6-1\n";
pub const DEMO_SPL_VERSION: &str = "0.8.6-1\n";
