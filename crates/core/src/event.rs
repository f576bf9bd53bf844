/// Events raised by the tray host and delivered to the tick loop.
///
/// Sources:
/// - StatusNotifierItem `Activate` → `Activated`
/// - Ctrl-C / SIGINT              → `Shutdown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayEvent {
    /// Left click on the icon in `slot`.
    Activated { slot: usize },
    /// Graceful shutdown requested.
    Shutdown,
}

/// Side effects the monitor asks its host to carry out.
///
/// The monitor never spawns processes itself; it hands a command back and
/// the host decides how to execute it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayCommand {
    /// Launch the configured task manager (fire-and-forget).
    Launch(String),
}
