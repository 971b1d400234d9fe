//! Status command implementation.

use anyhow::Result;
use serde::Serialize;

use crate::cli::StatusArgs;
use crate::config::Config;
use crate::system::{memory_usage, mounted_disks, DiskStatus, MemoryStatus};

#[derive(Serialize)]
struct StatusOutput {
    captured_at: String,
    disks: Vec<DiskStatus>,
    memory: MemoryStatus,
}

/// Run the status command.
pub fn run(args: StatusArgs, config: &Config) -> Result<()> {
    let status = StatusOutput {
        captured_at: chrono::Local::now().to_rfc3339(),
        disks: mounted_disks()?,
        memory: memory_usage(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("  {:<30} {:>12} {:>12} {:>7}", "MOUNT", "USED", "TOTAL", "USE%");
    println!("  {}", "─".repeat(64));
    for disk in &status.disks {
        let marker = if disk.percent > f32::from(config.system.disk_warn_percent) {
            " !"
        } else {
            ""
        };
        println!(
            "  {:<30} {:>12} {:>12} {:>6.1}%{}",
            disk.mount_point.display(),
            disk.used_human(),
            disk.total_human(),
            disk.percent,
            marker
        );
    }

    let memory = &status.memory;
    println!(
        "\nMemory: {} of {} used ({:.1}%){}",
        memory.used_human(),
        memory.total_human(),
        memory.percent,
        if memory.percent > f32::from(config.system.memory_warn_percent) {
            " !"
        } else {
            ""
        }
    );

    Ok(())
}
