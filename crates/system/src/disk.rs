use std::path::PathBuf;

/// Filesystems that live on optical media.
const OPTICAL_FS: [&str; 2] = ["iso9660", "udf"];

/// A mounted filesystem as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub mount_point: PathBuf,
    pub fs_type:     String,
    /// Mount options, when the platform exposes them.
    pub options:     Vec<String>,
}

impl Partition {
    /// Whether this partition belongs in the disk tooltip: it must have a
    /// filesystem type and must not be optical media.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        if self.fs_type.is_empty() {
            return false;
        }
        let optical = OPTICAL_FS.contains(&self.fs_type.to_ascii_lowercase().as_str())
            || self.options.iter().any(|o| o == "cdrom");
        !optical
    }
}

/// Space accounting for one mount point, in bytes.
///
/// Blocks reserved for root count as used, so `used + available == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceUsage {
    pub total:     u64,
    pub available: u64,
}

impl SpaceUsage {
    #[must_use]
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }

    /// Used share in `[0, 100]`.
    #[must_use]
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.used() as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(fs: &str, options: &[&str]) -> Partition {
        Partition {
            mount_point: PathBuf::from("/mnt"),
            fs_type:     fs.to_string(),
            options:     options.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn listing_rules() {
        assert!(part("ext4", &[]).is_listed());
        assert!(!part("", &[]).is_listed());
        assert!(!part("iso9660", &[]).is_listed());
        assert!(!part("UDF", &[]).is_listed());
        assert!(!part("vfat", &["ro", "cdrom"]).is_listed());
    }

    #[test]
    fn used_percent() {
        let u = SpaceUsage { total: 1000, available: 250 };
        assert_eq!(u.used(), 750);
        assert_eq!(u.used_percent(), 75.0);
        assert_eq!(SpaceUsage::default().used_percent(), 0.0);
    }

    #[test]
    fn reserved_blocks_count_as_used() {
        // 1000 blocks, 50 reserved for root and 100 available to users.
        let u = SpaceUsage { total: 1000, available: 100 };
        assert_eq!(u.used(), 900);
        assert_eq!(u.used_percent(), 90.0);
    }
}
