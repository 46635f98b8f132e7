//! Dataset resolution
//!
//! The engine asks a [`DatasetResolver`] for the active dataset once per
//! request, and only when the request carries no inline payload.

use crate::error::{Result, SdkError};
use datalabel_core::Dataset;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Supplies the dataset used when a request has no inline payload
pub trait DatasetResolver: Send + Sync {
    /// The currently active dataset, if any
    fn active_dataset(&self) -> Option<Arc<Dataset>>;
}

#[derive(Default)]
struct StoreState {
    /// Dataset names in insertion order
    order: Vec<String>,
    datasets: HashMap<String, Arc<Dataset>>,
    active: Option<String>,
}

/// Named datasets with one active selection
///
/// The first dataset inserted becomes active. Removing the active dataset
/// activates the earliest remaining one.
#[derive(Default)]
pub struct InMemoryDatasetStore {
    state: RwLock<StoreState>,
}

impl InMemoryDatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a dataset
    pub fn insert(&self, name: impl Into<String>, dataset: Dataset) {
        let name = name.into();
        let mut state = self.write();
        if !state.datasets.contains_key(&name) {
            state.order.push(name.clone());
        }
        if state.active.is_none() {
            state.active = Some(name.clone());
        }
        state.datasets.insert(name, Arc::new(dataset));
    }

    /// Make a stored dataset the active one
    pub fn set_active(&self, name: &str) -> Result<()> {
        let mut state = self.write();
        if !state.datasets.contains_key(name) {
            return Err(SdkError::UnknownDataset(name.to_string()));
        }
        state.active = Some(name.to_string());
        Ok(())
    }

    /// Remove a dataset, reassigning the active selection if needed
    pub fn remove(&self, name: &str) -> Option<Arc<Dataset>> {
        let mut state = self.write();
        let removed = state.datasets.remove(name)?;
        state.order.retain(|n| n != name);
        if state.active.as_deref() == Some(name) {
            state.active = state.order.first().cloned();
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Dataset>> {
        self.read().datasets.get(name).cloned()
    }

    pub fn active_name(&self) -> Option<String> {
        self.read().active.clone()
    }

    /// Dataset names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.read().order.clone()
    }

    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().order.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DatasetResolver for InMemoryDatasetStore {
    fn active_dataset(&self) -> Option<Arc<Dataset>> {
        let state = self.read();
        state
            .active
            .as_ref()
            .and_then(|name| state.datasets.get(name))
            .cloned()
    }
}
