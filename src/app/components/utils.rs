use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;

struct PendingCall(Cell<Option<JoinHandle<()>>>);

impl PendingCall {
    fn replace(&self, task: Option<JoinHandle<()>>) {
        if let Some(previous) = self.0.replace(task) {
            previous.abort();
        }
    }
}

impl Drop for PendingCall {
    fn drop(&mut self) {
        self.replace(None);
    }
}

/// Collapses bursts of calls into a single delayed one. Every call to
/// [`Debouncer::debounce`] cancels the call armed by the previous one on the
/// same instance. Must be used from within a `LocalSet`.
#[derive(Clone)]
pub struct Debouncer(Rc<PendingCall>);

impl Debouncer {
    pub fn new() -> Self {
        Self(Rc::new(PendingCall(Cell::new(None))))
    }

    pub fn debounce<F: FnOnce() + 'static>(&self, interval_ms: u32, f: F) {
        let pending = Rc::downgrade(&self.0);
        let new_task = tokio::task::spawn_local(async move {
            tokio::time::sleep(Duration::from_millis(interval_ms.into())).await;
            if let Some(pending) = pending.upgrade() {
                // forget our own handle so that f may debounce again
                let _ = pending.0.take();
                f();
            }
        });
        self.0.replace(Some(new_task));
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
