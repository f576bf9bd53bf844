//! Tray host for `hwmon`.
//!
//! Owns the tick loop and wires together:
//! - the [`Monitor`] (sampling, history, rendering)
//! - one StatusNotifierItem per icon on the session bus
//! - left-click activation → task-manager launch
//! - Ctrl-C → clean shutdown

pub mod launcher;
pub mod monitor;
pub mod sni;

pub use monitor::Monitor;
pub use sni::SniTray;

use hwmon_config::Settings;
use hwmon_core::{Result, TrayEvent};
use hwmon_system::SysinfoProbe;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the tray monitor.  Returns after Ctrl-C, or early on a
/// configuration or tray-registration error.
pub fn run(settings: Settings) -> Result<()> {
    // Everything happens on one thread: ticks never overlap and the
    // samplers need no locking.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve(settings))
}

async fn serve(settings: Settings) -> Result<()> {
    let interval = settings.interval;
    let mut monitor = Monitor::new(settings, SysinfoProbe::new())?;

    let (tx, mut events) = mpsc::unbounded_channel();
    let mut tray = SniTray::register(monitor.layout(), tx.clone()).await?;

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(TrayEvent::Shutdown);
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {e}"),
        }
    });

    monitor.start(&mut tray);
    tray.flush().await;

    // A late tick is delayed, never doubled up.
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await; // the first tick fires immediately

    info!(interval_ms = interval.as_millis() as u64, "hwmon running");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                monitor.tick(&mut tray);
                tray.flush().await;
            }
            Some(event) = events.recv() => match event {
                TrayEvent::Activated { slot } => {
                    if let Some(command) = monitor.on_activate(slot) {
                        launcher::execute(&command);
                    }
                }
                TrayEvent::Shutdown => {
                    info!("Shutting down");
                    break;
                }
            },
        }
    }

    Ok(())
}
