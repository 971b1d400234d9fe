use sysinfo::System;

use super::types::MemoryStatus;

/// Current physical memory usage.
pub fn memory_usage() -> MemoryStatus {
    let mut sys = System::new();
    sys.refresh_memory();
    MemoryStatus::new(sys.total_memory(), sys.used_memory(), sys.available_memory())
}
