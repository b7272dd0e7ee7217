//! Candidate list fetched on first access, at most once per run.

use std::cell::OnceCell;

use crate::error::CatalogError;

/// A catalog list loaded lazily.
///
/// The first [`get_or_load`](LazyList::get_or_load) runs the loader. A failed
/// load leaves an empty list and keeps the error for the caller to report;
/// the loader is never retried.
#[derive(Debug)]
pub struct LazyList<T> {
    cell: OnceCell<Loaded<T>>,
}

#[derive(Debug)]
struct Loaded<T> {
    items: Vec<T>,
    error: Option<CatalogError>,
}

impl<T> LazyList<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Items, loading them on first call.
    pub fn get_or_load<F>(&self, load: F) -> &[T]
    where
        F: FnOnce() -> Result<Vec<T>, CatalogError>,
    {
        let loaded = self.cell.get_or_init(|| match load() {
            Ok(items) => Loaded { items, error: None },
            Err(error) => Loaded {
                items: Vec::new(),
                error: Some(error),
            },
        });
        &loaded.items
    }

    /// The load error, if the load failed. Returned once.
    pub fn take_error(&mut self) -> Option<CatalogError> {
        self.cell.get_mut().and_then(|loaded| loaded.error.take())
    }
}

impl<T> Default for LazyList<T> {
    fn default() -> Self {
        Self::new()
    }
}
