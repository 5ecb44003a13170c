use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    /// Replaces the state with the reducer's output for `ev`.
    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }
}
