use std::collections::HashSet;
use sysinfo::{ProcessesToUpdate, System};

/// Snapshot of running process names, lowercased.
#[derive(Debug, Clone, Default)]
pub struct RunningProcesses {
    names: HashSet<String>,
}

impl RunningProcesses {
    /// Capture the processes running right now.
    pub fn snapshot() -> Self {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let names = sys
            .processes()
            .values()
            .map(|p| p.name().to_string_lossy().to_lowercase())
            .collect();

        Self { names }
    }

    /// Build a snapshot from known names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive check for a single process name.
    pub fn is_running(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn any_running(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.is_running(n))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
