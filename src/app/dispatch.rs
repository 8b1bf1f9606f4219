use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::future::LocalBoxFuture;
use futures::stream::StreamExt;
use std::future::Future;
use tokio::task::JoinHandle;

use super::AppAction;

pub type FutureAppAction = LocalBoxFuture<'static, Option<AppAction>>;

pub trait ActionDispatcher {
    fn dispatch(&self, action: AppAction);
    fn dispatch_async(&self, action: FutureAppAction);
    fn box_clone(&self) -> Box<dyn ActionDispatcher>;
}

/// Spawns futures on the current thread. Everything runs inside the
/// application's `LocalSet`, so tasks may hold `Rc`s.
#[derive(Clone, Default)]
pub struct Worker;

impl Worker {
    pub fn send_local_task<T: Future<Output = ()> + 'static>(&self, task: T) -> JoinHandle<()> {
        tokio::task::spawn_local(task)
    }
}

#[derive(Clone)]
pub struct ActionDispatcherImpl {
    sender: UnboundedSender<AppAction>,
    worker: Worker,
}

impl ActionDispatcherImpl {
    pub fn new(sender: UnboundedSender<AppAction>, worker: Worker) -> Self {
        Self { sender, worker }
    }
}

impl ActionDispatcher for ActionDispatcherImpl {
    fn dispatch(&self, action: AppAction) {
        if let Err(err) = self.sender.unbounded_send(action) {
            warn!("dispatch loop closed, dropping {:?}", err.into_inner());
        }
    }

    fn dispatch_async(&self, action: FutureAppAction) {
        let sender = self.sender.clone();
        self.worker.send_local_task(async move {
            if let Some(action) = action.await {
                if let Err(err) = sender.unbounded_send(action) {
                    warn!("dispatch loop closed, dropping {:?}", err.into_inner());
                }
            }
        });
    }

    fn box_clone(&self) -> Box<dyn ActionDispatcher> {
        Box::new(self.clone())
    }
}

// The single writer: actions are applied one at a time, in the order they were sent
pub struct DispatchLoop {
    receiver: UnboundedReceiver<AppAction>,
    sender: UnboundedSender<AppAction>,
}

impl DispatchLoop {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<AppAction>();
        Self { receiver, sender }
    }

    pub fn make_dispatcher(&self, worker: Worker) -> Box<dyn ActionDispatcher> {
        Box::new(ActionDispatcherImpl::new(self.sender.clone(), worker))
    }

    // Runs until every dispatcher has been dropped
    pub async fn attach(self, mut handler: impl FnMut(AppAction)) {
        let Self {
            mut receiver,
            sender,
        } = self;
        drop(sender);
        while let Some(action) = receiver.next().await {
            handler(action);
        }
    }
}

impl Default for DispatchLoop {
    fn default() -> Self {
        Self::new()
    }
}
