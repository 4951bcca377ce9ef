//! ModelRegistry - process-lifetime cache of model descriptors.
//!
//! This module provides [`ModelRegistry`], which maps a [`TypeKey`] to the
//! [`ModelDescriptor`] built for that type, building it on first request and
//! handing out the same `Arc` on every request after that.
//!
//! # Concurrency
//!
//! The registry is `Sync` and meant to be shared. Lookups read a sharded
//! concurrent map. On a miss the caller builds a candidate descriptor with no
//! lock held and then publishes it with a single insert-if-absent. When
//! several callers miss on the same type at once, each builds a candidate,
//! exactly one is published, and the others are dropped; every caller returns
//! the published instance.
//!
//! Entries are never evicted.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use modelbind_core::{MemberShape, Model, ModelShape};
//! use modelbind_registry::ModelRegistry;
//!
//! struct Args;
//!
//! impl Model for Args {
//!     fn model_shape() -> ModelShape {
//!         ModelShape::new().with_member(MemberShape::new::<Args, bool>("verbose"))
//!     }
//! }
//!
//! let registry = ModelRegistry::new();
//! let first = registry.from_type::<Args>();
//! let second = registry.from_type::<Args>();
//! assert!(Arc::ptr_eq(&first, &second));
//! assert_eq!(registry.stats().misses, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use modelbind_core::{BindingResult, Model, ModelType, TypeKey};

use crate::ModelDescriptor;

static GLOBAL: LazyLock<ModelRegistry> = LazyLock::new(ModelRegistry::new);

/// Upper bound on map shards; larger requests are clamped before rounding.
const MAX_SHARD_AMOUNT: usize = 1 << 12;

/// Construction options for a [`ModelRegistry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of entries to reserve room for up front.
    pub initial_capacity: usize,
    /// Number of map shards. Clamped to `2..=4096`, then rounded up to a
    /// power of two.
    /// `None` uses the map's own default.
    pub shard_amount: Option<usize>,
}

impl RegistryConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }
}

/// Lookup counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that built a candidate descriptor.
    pub misses: u64,
    /// Candidates dropped because another caller published first.
    pub discarded: u64,
}

/// Type-keyed cache of [`ModelDescriptor`]s.
pub struct ModelRegistry {
    descriptors: DashMap<TypeKey, Arc<ModelDescriptor>, FxBuildHasher>,
    hits: AtomicU64,
    misses: AtomicU64,
    discarded: AtomicU64,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit sizing.
    pub fn with_config(config: RegistryConfig) -> Self {
        let descriptors = match config.shard_amount {
            Some(shards) => DashMap::with_capacity_and_hasher_and_shard_amount(
                config.initial_capacity,
                FxBuildHasher,
                shards.clamp(2, MAX_SHARD_AMOUNT).next_power_of_two(),
            ),
            None => DashMap::with_capacity_and_hasher(config.initial_capacity, FxBuildHasher),
        };

        Self {
            descriptors,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ModelRegistry {
        &GLOBAL
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get the descriptor for `model_type`, building and caching it on first use.
    ///
    /// Fails with [`BindingError::InvalidArgument`](modelbind_core::BindingError::InvalidArgument)
    /// when `model_type` is [`ModelType::EMPTY`]; the registry is left untouched.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn get_or_create(&self, model_type: ModelType) -> BindingResult<Arc<ModelDescriptor>> {
        if let Some(hit) = self.lookup(model_type.key()) {
            return Ok(hit);
        }

        let candidate = ModelDescriptor::new(model_type)?;
        Ok(self.publish(candidate))
    }

    /// Get the descriptor for `T`, building and caching it on first use.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_type<T: Model>(&self) -> Arc<ModelDescriptor> {
        let model_type = ModelType::of::<T>();
        if let Some(hit) = self.lookup(model_type.key()) {
            return hit;
        }

        let candidate = ModelDescriptor::discover(model_type.type_ref(), &T::model_shape());
        self.publish(candidate)
    }

    /// Get an already published descriptor without building one.
    pub fn get(&self, key: TypeKey) -> Option<Arc<ModelDescriptor>> {
        self.descriptors
            .get(&key)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: TypeKey) -> bool {
        self.descriptors.contains_key(&key)
    }

    /// Number of published descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
        }
    }

    // ==========================================================================
    // Internals
    // ==========================================================================

    fn lookup(&self, key: TypeKey) -> Option<Arc<ModelDescriptor>> {
        let hit = self.get(key)?;
        self.hits.fetch_add(1, Ordering::Relaxed);
        trace!(model = hit.model_type().name(), "model descriptor cache hit");
        Some(hit)
    }

    /// Insert `candidate` unless another caller got there first, and return
    /// whichever descriptor ends up cached.
    fn publish(&self, candidate: ModelDescriptor) -> Arc<ModelDescriptor> {
        self.misses.fetch_add(1, Ordering::Relaxed);

        let model = candidate.model_type();
        debug!(
            model = model.name(),
            properties = candidate.property_descriptors().len(),
            constructors = candidate.constructor_descriptors().len(),
            "built model descriptor"
        );

        match self.descriptors.entry(model.key()) {
            Entry::Occupied(entry) => {
                self.discarded.fetch_add(1, Ordering::Relaxed);
                debug!(model = model.name(), "discarding model descriptor, lost publish race");
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                let published = Arc::new(candidate);
                entry.insert(Arc::clone(&published));
                debug!(model = model.name(), "published model descriptor");
                published
            }
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
