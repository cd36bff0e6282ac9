use std::sync::Arc;

use follows_dispatch::Dispatcher;
use follows_store::{Handle, UserStore};

use crate::current::CurrentHandle;

/// Shared state behind every route.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub current: Arc<CurrentHandle>,
}

impl AppState {
    /// State whose current handle starts at the store's seed.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        let dispatcher = Dispatcher::new(store);
        let current = Arc::new(CurrentHandle::new(dispatcher.initial_handle()));
        Self {
            dispatcher,
            current,
        }
    }

    pub fn handle(&self) -> Handle {
        self.current.load()
    }
}
