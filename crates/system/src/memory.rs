/// Total and used bytes of RAM or swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryReading {
    pub total: u64,
    pub used:  u64,
}

impl MemoryReading {
    /// Used share in `[0, 100]`; `0` when nothing is installed.
    #[must_use]
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Format a byte count with binary prefixes (e.g. `"512.0 MB"`).
///
/// Picks the largest unit from K to Y that `n` reaches; smaller values are
/// printed as plain bytes.
pub fn bytes2human(n: u64) -> String {
    const SYMBOLS: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

    for (rank, sym) in SYMBOLS.iter().enumerate().rev() {
        // 1024^(rank + 1); Z and Y exceed u64 and never match.
        let unit = 1u128 << (10 * (rank + 1));
        if u128::from(n) >= unit {
            return format!("{:.1} {sym}B", n as f64 / unit as f64);
        }
    }
    format!("{n} B")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_one_kib_is_plain_bytes() {
        assert_eq!(bytes2human(0), "0 B");
        assert_eq!(bytes2human(1023), "1023 B");
    }

    #[test]
    fn kib_boundaries() {
        assert_eq!(bytes2human(1024), "1.0 KB");
        assert_eq!(bytes2human(1536), "1.5 KB");
    }

    #[test]
    fn larger_units() {
        assert_eq!(bytes2human(1024 * 1024), "1.0 MB");
        assert_eq!(bytes2human(512 * 1024 * 1024), "512.0 MB");
        assert_eq!(bytes2human(8 * 1024 * 1024 * 1024), "8.0 GB");
        assert_eq!(bytes2human(u64::MAX), "16.0 EB");
    }

    #[test]
    fn used_percent_handles_empty() {
        assert_eq!(MemoryReading::default().used_percent(), 0.0);
        let r = MemoryReading { total: 200, used: 50 };
        assert_eq!(r.used_percent(), 25.0);
    }
}
