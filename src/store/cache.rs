use std::sync::RwLock;

/// Point-in-time view of one cached entity list, as handed to page
/// rendering. `loading` is true only until the first fetch settles.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub list: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The `{ list, loading, error }` cell shared by the three content stores.
///
/// Holds its lock only to read or patch the vector; database round-trips
/// happen outside it, and every mutation lands here strictly after the
/// database has acknowledged the write.
pub struct ListCache<T> {
    inner: RwLock<ListState<T>>,
}

impl<T: Clone> ListCache<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ListState {
                list: Vec::new(),
                loading: true,
                error: None,
            }),
        }
    }

    pub fn snapshot(&self) -> ListState<T> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// A completed fetch replaces the list wholesale and clears any
    /// previous fetch error.
    pub fn set_fetched(&self, items: Vec<T>) {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.list = items;
        state.loading = false;
        state.error = None;
    }

    /// A failed fetch records the message and leaves the list as it was,
    /// which on a first fetch means empty.
    pub fn set_fetch_failed(&self, message: String) {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.loading = false;
        state.error = Some(message);
    }

    /// New records always enter at the front, even when their recency
    /// field says otherwise. A backdated entry sits above newer ones
    /// until the next refetch re-sorts the list.
    pub fn prepend(&self, item: T) {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.list.insert(0, item);
    }

    /// Replaces the first entry matching `target` in place, keeping list
    /// order. A miss (entry dropped by a concurrent refetch) is a no-op.
    pub fn replace<F>(&self, target: F, item: T)
    where
        F: Fn(&T) -> bool,
    {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(slot) = state.list.iter_mut().find(|t| target(t)) {
            *slot = item;
        }
    }

    pub fn remove<F>(&self, target: F)
    where
        F: Fn(&T) -> bool,
    {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.list.retain(|t| !target(t));
    }
}

impl<T: Clone> Default for ListCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
