use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl From<&AppError> for ErrorInfo {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Coarse view of a collection for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionState {
    Loading,
    Loaded(usize),
    Failed(ErrorInfo),
}

/// One fetch-once product set.
///
/// Starts loading and leaves that state exactly once per fetch attempt. A
/// second attempt is only possible from the failed state via
/// [`CachedCollection::begin_retry`].
#[derive(Debug, Clone, PartialEq)]
pub struct CachedCollection<T> {
    items: Option<Vec<T>>,
    loading: bool,
    error: Option<ErrorInfo>,
}

impl<T> Default for CachedCollection<T> {
    fn default() -> Self {
        Self {
            items: None,
            loading: true,
            error: None,
        }
    }
}

impl<T: Clone> CachedCollection<T> {
    /// Records the fetch outcome. Returns `false` when the collection had
    /// already resolved, leaving it untouched.
    pub fn resolve(&mut self, result: AppResult<Vec<T>>) -> bool {
        if !self.loading {
            return false;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = Some(items);
                self.error = None;
            }
            Err(err) => {
                self.items = None;
                self.error = Some(ErrorInfo::from(&err));
            }
        }
        true
    }

    pub fn begin_retry(&mut self) -> bool {
        if self.loading || self.error.is_none() {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Cached items, optionally truncated to the first `limit`. `None` until
    /// a fetch succeeds.
    pub fn items(&self, limit: Option<usize>) -> Option<Vec<T>> {
        let items = self.items.as_ref()?;
        let end = limit.map_or(items.len(), |limit| limit.min(items.len()));
        Some(items[..end].to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn state(&self) -> CollectionState {
        if self.loading {
            return CollectionState::Loading;
        }
        match (&self.items, &self.error) {
            (_, Some(error)) => CollectionState::Failed(error.clone()),
            (Some(items), None) => CollectionState::Loaded(items.len()),
            (None, None) => CollectionState::Loaded(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CachedCollection, CollectionState};
    use crate::error::AppError;

    #[test]
    fn starts_loading_and_resolves_once() {
        let mut collection = CachedCollection::<u8>::default();
        assert!(collection.is_loading());
        assert_eq!(collection.items(None), None);

        assert!(collection.resolve(Ok(vec![1, 2, 3])));
        assert!(!collection.resolve(Ok(vec![9])));
        assert_eq!(collection.items(None), Some(vec![1, 2, 3]));
        assert_eq!(collection.state(), CollectionState::Loaded(3));
    }

    #[test]
    fn limit_truncates_without_touching_storage() {
        let mut collection = CachedCollection::default();
        collection.resolve(Ok(vec!['a', 'b', 'c']));

        assert_eq!(collection.items(Some(2)), Some(vec!['a', 'b']));
        assert_eq!(collection.items(Some(10)), Some(vec!['a', 'b', 'c']));
        assert_eq!(collection.items(Some(0)), Some(Vec::new()));
        assert_eq!(collection.items(Some(2)), collection.items(Some(2)));
    }

    #[test]
    fn failure_is_recorded_and_only_failures_can_retry() {
        let mut collection = CachedCollection::<u8>::default();
        assert!(!collection.begin_retry());

        collection.resolve(Err(AppError::catalog("saved", "offline")));
        assert!(!collection.is_loading());
        assert!(matches!(collection.state(), CollectionState::Failed(_)));
        assert_eq!(collection.items(None), None);

        assert!(collection.begin_retry());
        assert!(collection.is_loading());
        assert!(collection.resolve(Ok(vec![4])));
        assert!(!collection.begin_retry());
        assert_eq!(collection.items(None), Some(vec![4]));
    }
}
