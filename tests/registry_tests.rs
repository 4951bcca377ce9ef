//! Integration tests for the model registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use modelbind::{
    BindingError, ConstructorShape, MemberShape, Model, ModelDescriptor, ModelRegistry,
    ModelShape, ModelType, ParamShape, Scope, TypeKey, TypeRef, ValueDescriptor, Visibility,
    constructor,
};

#[derive(Model)]
#[model(constructors(new, with_source))]
pub struct CopyFiles {
    pub source: String,
    pub destination: String,
    #[model(readonly)]
    pub bytes_copied: u64,
    pub(crate) attempts: u32,
    checksum: Option<u64>,
}

impl CopyFiles {
    #[constructor]
    pub fn new() -> Self {
        Self::with_source(String::new(), String::new())
    }

    #[constructor]
    pub fn with_source(source: String, destination: String) -> Self {
        Self {
            source,
            destination,
            bytes_copied: 0,
            attempts: 0,
            checksum: None,
        }
    }
}

#[derive(Model)]
pub struct Status {
    #[model(readonly)]
    pub uptime: u64,
    running: bool,
}

#[derive(Model)]
#[model(constructors(new))]
pub struct Move {
    pub from: String,
    pub to: String,
}

impl Move {
    #[constructor]
    pub fn new(from: String, to: String) -> Self {
        Self { from, to }
    }
}

#[test]
fn identity_caching() {
    let registry = ModelRegistry::new();
    let a = registry.get_or_create(ModelType::of::<CopyFiles>()).unwrap();
    let b = registry.get_or_create(ModelType::of::<CopyFiles>()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn global_registry_caches_by_identity() {
    let a = ModelDescriptor::from_type::<Move>();
    let b = ModelDescriptor::from_model_type(ModelType::of::<Move>()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &ModelRegistry::global().from_type::<Move>()));
}

#[test]
fn cross_type_isolation() {
    let registry = ModelRegistry::new();
    let copy = registry.from_type::<CopyFiles>();
    let mv = registry.from_type::<Move>();
    assert!(!Arc::ptr_eq(&copy, &mv));

    for prop in copy.property_descriptors() {
        assert!(prop.declaring_type().is::<CopyFiles>());
    }
    for prop in mv.property_descriptors() {
        assert!(prop.declaring_type().is::<Move>());
    }
    assert_eq!(copy.constructor_descriptors().len(), 2);
    assert_eq!(mv.constructor_descriptors().len(), 1);
}

#[test]
fn member_filtering() {
    let descriptor = ModelRegistry::new().from_type::<CopyFiles>();
    let names: Vec<_> = descriptor
        .property_descriptors()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, ["source", "destination"]);

    let types: Vec<TypeRef> = descriptor.value_descriptors().map(|v| v.value_type()).collect();
    assert!(types.iter().all(|t| t.is::<String>()));
}

#[test]
fn constructor_enumeration() {
    let descriptor = ModelRegistry::new().from_type::<CopyFiles>();
    let ctors = descriptor.constructor_descriptors();
    assert_eq!(ctors.len(), 2);
    assert_eq!(ctors[0].arity(), 0);
    assert_eq!(ctors[1].arity(), 2);

    let params: Vec<_> = ctors[1]
        .value_descriptors()
        .map(|v| v.value_name().to_string())
        .collect();
    assert_eq!(params, ["source", "destination"]);
}

#[test]
fn no_member_case() {
    let descriptor = ModelRegistry::new().from_type::<Status>();
    assert!(descriptor.property_descriptors().is_empty());
    assert!(descriptor.constructor_descriptors().is_empty());
    assert!(descriptor.model_type().is::<Status>());
}

#[test]
fn empty_type_failure_leaves_cache_unchanged() {
    let registry = ModelRegistry::new();
    registry.from_type::<Move>();
    let before = registry.stats();

    let err = registry.get_or_create(ModelType::EMPTY).unwrap_err();
    assert_eq!(
        err,
        BindingError::InvalidArgument {
            argument: "model_type",
            reason: "type identity is empty",
        }
    );
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.stats(), before);
    assert!(!registry.contains(TypeKey::EMPTY));

    let copy = registry.get_or_create(ModelType::of::<CopyFiles>()).unwrap();
    assert_eq!(copy.property_descriptors().len(), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn global_rejects_empty_type() {
    assert!(ModelDescriptor::from_model_type(ModelType::EMPTY).is_err());
    assert!(ModelRegistry::global().get(TypeKey::EMPTY).is_none());
}

// ============================================================================
// Explicit registration
// ============================================================================

struct ForeignConfig;

fn foreign_config_shape() -> ModelShape {
    ModelShape::new()
        .with_member(MemberShape::new::<ForeignConfig, String>("path"))
        .with_member(MemberShape::new::<ForeignConfig, u32>("VERSION").with_scope(Scope::Static))
        .with_member(
            MemberShape::new::<ForeignConfig, bool>("loaded").with_visibility(Visibility::Restricted),
        )
        .with_constructor(
            ConstructorShape::new("open").with_param(ParamShape::new::<String>("path")),
        )
        .with_constructor(ConstructorShape::new("global").with_scope(Scope::Static))
}

#[test]
fn explicit_registration() {
    let registry = ModelRegistry::new();
    let model_type = ModelType::new(TypeRef::of::<ForeignConfig>(), foreign_config_shape);

    let descriptor = registry.get_or_create(model_type).unwrap();
    assert_eq!(descriptor.property_descriptors().len(), 1);
    assert_eq!(descriptor.property_descriptors()[0].name(), "path");
    assert_eq!(descriptor.constructor_descriptors().len(), 1);
    assert_eq!(descriptor.constructor_descriptors()[0].name(), "open");

    assert!(registry.contains(TypeKey::of::<ForeignConfig>()));
}

fn move_override_shape() -> ModelShape {
    ModelShape::new().with_member(MemberShape::new::<Move, String>("destination"))
}

#[test]
fn explicit_and_derived_identities_share_an_entry() {
    let registry = ModelRegistry::new();
    let override_type = ModelType::new(TypeRef::of::<Move>(), move_override_shape);
    assert_eq!(override_type, ModelType::of::<Move>());

    let first = registry.get_or_create(override_type).unwrap();
    let derived = registry.from_type::<Move>();
    assert!(Arc::ptr_eq(&first, &derived));
    assert_eq!(derived.property_descriptors()[0].name(), "destination");

    let registry = ModelRegistry::new();
    let derived = registry.from_type::<Move>();
    let second = registry.get_or_create(override_type).unwrap();
    assert!(Arc::ptr_eq(&derived, &second));
    assert_eq!(second.property_descriptors().len(), 2);
    assert_eq!(registry.len(), 1);
}

// ============================================================================
// Concurrency
// ============================================================================

static SLOW_SHAPE_CALLS: AtomicUsize = AtomicUsize::new(0);

struct Slow;

impl Model for Slow {
    fn model_shape() -> ModelShape {
        SLOW_SHAPE_CALLS.fetch_add(1, Ordering::SeqCst);
        thread::yield_now();
        ModelShape::new()
            .with_member(MemberShape::new::<Slow, String>("input"))
            .with_constructor(ConstructorShape::new("new"))
    }
}

#[test]
fn concurrent_convergence() {
    const THREADS: usize = 16;

    let registry = ModelRegistry::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Arc<ModelDescriptor>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.get_or_create(ModelType::of::<Slow>()).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), THREADS);
    let first = &results[0];
    assert!(results.iter().all(|d| Arc::ptr_eq(first, d)));
    assert_eq!(registry.len(), 1);

    let stats = registry.stats();
    assert_eq!(stats.hits + stats.misses, THREADS as u64);
    assert!(stats.misses >= 1);
    assert_eq!(stats.misses - stats.discarded, 1);
    assert_eq!(SLOW_SHAPE_CALLS.load(Ordering::SeqCst) as u64, stats.misses);

    let later = registry.get_or_create(ModelType::of::<Slow>()).unwrap();
    assert!(Arc::ptr_eq(first, &later));
}

#[test]
fn concurrent_distinct_types() {
    let registry = ModelRegistry::new();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let copy = registry.from_type::<CopyFiles>();
                let mv = registry.from_type::<Move>();
                let status = registry.from_type::<Status>();
                assert!(copy.model_type().is::<CopyFiles>());
                assert!(mv.model_type().is::<Move>());
                assert!(status.model_type().is::<Status>());
            });
        }
    });

    assert_eq!(registry.len(), 3);
}
