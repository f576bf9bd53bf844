use clap::Parser;
use std::path::PathBuf;

/// Command-line options.  Anything given here overrides `hwmon.toml`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hwmon", version, about = "Hardware monitor graphs for the system tray")]
pub struct Cli {
    /// Show a system load average graph
    #[arg(long)]
    pub load: bool,

    /// Show a CPU activity graph
    #[arg(long)]
    pub cpu: bool,

    /// Show a CPU activity graph for each logical CPU core
    #[arg(long)]
    pub core: bool,

    /// Show a memory usage graph
    #[arg(long)]
    pub mem: bool,

    /// Tooltip: show used memory in percentage
    #[arg(long = "mem_percent")]
    pub mem_percent: bool,

    /// Show a swap usage graph
    #[arg(long)]
    pub swap: bool,

    /// Tooltip: show used swap in percentage
    #[arg(long = "swap_percent")]
    pub swap_percent: bool,

    /// Show a network usage graph
    #[arg(long)]
    pub net: bool,

    /// Maximum value for the network usage graph, in Mbps [default: 40]
    #[arg(long = "net_scale", value_name = "MBPS")]
    pub net_scale: Option<u32>,

    /// Show a disk I/O graph
    #[arg(long)]
    pub io: bool,

    /// Maximum value for the disk I/O graph, in MB/s [default: 100]
    #[arg(long = "io_scale", value_name = "MBS")]
    pub io_scale: Option<u32>,

    /// Icon size in pixels [default: 22]
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<u32>,

    /// Try to invert the order of the icons
    #[arg(long)]
    pub invert: bool,

    /// Refresh interval in milliseconds [default: 1000]
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Background colour (RGBA hex) [default: #00000077]
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Load graph colour (RGBA hex) [default: #f93]
    #[arg(long = "fg_load", value_name = "HEX")]
    pub fg_load: Option<String>,

    /// CPU graph colour (RGBA hex) [default: #3f3]
    #[arg(long = "fg_cpu", value_name = "HEX")]
    pub fg_cpu: Option<String>,

    /// Memory graph colour (RGBA hex) [default: #ff3]
    #[arg(long = "fg_mem", value_name = "HEX")]
    pub fg_mem: Option<String>,

    /// Swap graph colour (RGBA hex) [default: #419CFF]
    #[arg(long = "fg_swap", value_name = "HEX")]
    pub fg_swap: Option<String>,

    /// Network graph colour (RGBA hex) [default: #33f]
    #[arg(long = "fg_net", value_name = "HEX")]
    pub fg_net: Option<String>,

    /// Disk I/O graph colour (RGBA hex) [default: #3cf]
    #[arg(long = "fg_io", value_name = "HEX")]
    pub fg_io: Option<String>,

    /// Task manager command to execute on left click
    #[arg(long = "task_manager", value_name = "COMMAND")]
    pub task_manager: Option<String>,

    /// Config file [default: $XDG_CONFIG_HOME/hwmon/hwmon.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscored_flags() {
        let cli = Cli::try_parse_from([
            "hwmon",
            "--mem",
            "--mem_percent",
            "--net_scale",
            "80",
            "--fg_io",
            "#fff",
            "--task_manager",
            "htop -d 10",
        ])
        .unwrap();
        assert!(cli.mem && cli.mem_percent);
        assert_eq!(cli.net_scale, Some(80));
        assert_eq!(cli.fg_io.as_deref(), Some("#fff"));
        assert_eq!(cli.task_manager.as_deref(), Some("htop -d 10"));
        assert!(!cli.load);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["hwmon", "--gpu"]).is_err());
    }
}
