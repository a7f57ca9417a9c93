use crate::domain::SessionHistory;
use crate::persistence::store::{KeyValueStore, StoreError};

/// Store key under which the session history is kept
pub const HISTORY_KEY: &str = "pomodoroHistory";

/// Load the session history. Absent, unreadable, or malformed data all
/// produce an empty history; the latter two are logged.
pub fn load_history<K: KeyValueStore + ?Sized>(store: &K) -> SessionHistory {
    let raw = match store.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SessionHistory::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read session history, starting empty");
            return SessionHistory::new();
        }
    };

    match SessionHistory::from_json(&raw) {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!(error = %e, "session history is malformed, starting empty");
            SessionHistory::new()
        }
    }
}

/// Write the full session history
pub fn save_history<K: KeyValueStore + ?Sized>(
    store: &mut K,
    history: &SessionHistory,
) -> Result<(), StoreError> {
    let json = history.to_json()?;
    store.set(HISTORY_KEY, &json)
}
