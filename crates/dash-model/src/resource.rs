//! Fetch state reported by the data source.

/// `{data, loading, error}` for one remote collection.
///
/// Reloading keeps the previous data so views can keep showing the last
/// rows while the next fetch is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Resource<T> {
    /// Mark a fetch as started. Data is retained.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply a finished fetch.
    ///
    /// On failure the previous data is kept but the error is recorded.
    pub fn finish_fetch(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_keeps_data() {
        let mut r = Resource::default();
        r.finish_fetch(Ok(vec![1, 2, 3]));
        r.begin_fetch();
        assert!(r.loading);
        assert_eq!(r.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_error_then_success_clears_error() {
        let mut r: Resource<u8> = Resource::default();
        r.begin_fetch();
        r.finish_fetch(Err("boom".into()));
        assert_eq!(r.error.as_deref(), Some("boom"));
        assert!(!r.loading);

        r.finish_fetch(Ok(vec![1]));
        assert!(r.error.is_none());
    }
}
