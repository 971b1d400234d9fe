use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use nix::sys::signal::{self, SigHandler, Signal};

static CANCEL: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Route SIGINT and SIGTERM into a cooperative cancel flag.
///
/// Returns the process-wide flag; calling again returns the same one.
pub fn install_cancel_handler() -> nix::Result<Arc<AtomicBool>> {
    if let Some(flag) = CANCEL.get() {
        return Ok(Arc::clone(flag));
    }

    let flag = Arc::clone(CANCEL.get_or_init(|| Arc::new(AtomicBool::new(false))));

    // SAFETY: the handler only performs an atomic store on an initialised flag.
    unsafe {
        signal::signal(Signal::SIGTERM, SigHandler::Handler(handle_cancel))?;
        signal::signal(Signal::SIGINT, SigHandler::Handler(handle_cancel))?;
    }

    Ok(flag)
}

extern "C" fn handle_cancel(_: i32) {
    if let Some(flag) = CANCEL.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_returns_shared_flag() {
        let first = install_cancel_handler().unwrap();
        let second = install_cancel_handler().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_handler_sets_flag() {
        let flag = install_cancel_handler().unwrap();
        handle_cancel(0);
        assert!(flag.load(Ordering::SeqCst));
        flag.store(false, Ordering::SeqCst);
    }
}
