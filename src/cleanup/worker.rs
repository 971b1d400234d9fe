//! Runs a cleanup on a background thread and streams progress back.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use super::plan::CleanupPlan;
use super::runner::{CleanupOutcome, CleanupRunner};

/// Update sent from the cleanup worker.
#[derive(Debug, Clone)]
pub enum ProgressUpdate {
    /// Advisory progress; percentages never decrease.
    Progress { percent: u8, message: String },
    /// The cleanup finished (or was cancelled).
    Finished(CleanupOutcome),
}

/// Handle to a cleanup running on its own thread.
///
/// All sweeps of the plan are serialized on that one thread.
pub struct CleanupWorker {
    updates: Receiver<ProgressUpdate>,
    handle: JoinHandle<()>,
}

impl CleanupWorker {
    /// Start running `plan` with `runner` on a new thread.
    pub fn spawn(runner: CleanupRunner, plan: CleanupPlan) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let progress_tx = tx.clone();
            let outcome = runner.run_with_progress(&plan, &mut |percent, message| {
                // The receiver may have hung up; the cleanup still runs to completion
                let _ = progress_tx.send(ProgressUpdate::Progress {
                    percent,
                    message: message.to_string(),
                });
            });
            let _ = tx.send(ProgressUpdate::Finished(outcome));
        });

        Self {
            updates: rx,
            handle,
        }
    }

    /// Progress updates, ending with `Finished`.
    pub fn updates(&self) -> &Receiver<ProgressUpdate> {
        &self.updates
    }

    /// Block until the worker finishes, forwarding progress to `on_progress`.
    ///
    /// Returns `None` if the worker thread panicked before finishing.
    pub fn wait(self, mut on_progress: impl FnMut(u8, &str)) -> Option<CleanupOutcome> {
        let mut outcome = None;
        for update in self.updates.iter() {
            match update {
                ProgressUpdate::Progress { percent, message } => on_progress(percent, &message),
                ProgressUpdate::Finished(result) => {
                    outcome = Some(result);
                    break;
                }
            }
        }

        if self.handle.join().is_err() {
            tracing::error!("Cleanup worker panicked");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweeper::{SweepTarget, Sweeper};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_worker_streams_progress_and_outcome() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(tmp.path().join(format!("f{}", i)), "abc").unwrap();
        }

        let mut plan = CleanupPlan::new();
        plan.add("Temporary Files", vec![SweepTarget::new(tmp.path())]);

        let worker = CleanupWorker::spawn(CleanupRunner::new(Sweeper::new()), plan);
        let mut percents = Vec::new();
        let outcome = worker.wait(|p, _| percents.push(p)).unwrap();

        assert_eq!(outcome.totals().files_deleted, 5);
        assert_eq!(outcome.totals().bytes_freed, 15);
        assert_eq!(percents.last(), Some(&100));
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_worker_updates_channel() {
        let tmp = TempDir::new().unwrap();
        let mut plan = CleanupPlan::new();
        plan.add("Empty", vec![SweepTarget::new(tmp.path())]);

        let worker = CleanupWorker::spawn(CleanupRunner::new(Sweeper::new()), plan);
        let finished = worker
            .updates()
            .iter()
            .find(|u| matches!(u, ProgressUpdate::Finished(_)));

        assert!(finished.is_some());
    }
}
