pub mod action;
pub mod state;

pub use action::{Action, Slice};
pub use state::{reduce, AppState};

use crate::persistence::{
    load_snapshot, write_key, write_user, Storage, StorageError, NOTIFICATIONS_KEY, TASKS_KEY,
    TIME_LOGS_KEY,
};

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Owns the state, applies actions through [`reduce`] and writes the
/// changed slice back to storage.
pub struct Store {
    state: AppState,
    storage: Box<dyn Storage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    /// A store with empty state on top of `storage`
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            state: AppState::default(),
            storage,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Build the initial state from whatever `storage` holds
    pub fn rehydrate(storage: Box<dyn Storage>) -> Result<Self, StorageError> {
        let snapshot = load_snapshot(storage.as_ref())?;
        let state = AppState::from_snapshot(snapshot);

        if let Some(user) = &state.user {
            let open = state
                .time_logs
                .iter()
                .filter(|log| log.is_open() && log.user_id == user.id)
                .count();
            if open > 1 {
                tracing::warn!(user = %user.id, open, "more than one open time log, using the latest");
            }
        }
        tracing::info!(
            authenticated = state.is_authenticated,
            tasks = state.tasks.len(),
            time_logs = state.time_logs.len(),
            notifications = state.notifications.len(),
            "state rehydrated"
        );

        Ok(Self {
            state,
            ..Self::new(storage)
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Apply `action`, persist its slice and notify subscribers.
    ///
    /// The in-memory transition always happens; a storage failure is
    /// returned after listeners have seen the new state.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StorageError> {
        let name = action.name();
        let slice = action.slice();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        tracing::debug!(action = name, ?slice, "dispatched");

        let persisted = self.persist(slice);
        if let Err(err) = &persisted {
            tracing::error!(action = name, error = %err, "failed to persist state");
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        persisted
    }

    fn persist(&mut self, slice: Slice) -> Result<(), StorageError> {
        let storage = self.storage.as_mut();
        match slice {
            Slice::User => write_user(storage, self.state.user.as_ref()),
            Slice::Tasks => write_key(storage, TASKS_KEY, &self.state.tasks),
            Slice::TimeLogs => write_key(storage, TIME_LOGS_KEY, &self.state.time_logs),
            Slice::Notifications => {
                write_key(storage, NOTIFICATIONS_KEY, &self.state.notifications)
            }
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    #[cfg(test)]
    pub fn into_storage(self) -> Box<dyn Storage> {
        self.storage
    }
}
