//! Declarative cache-hierarchy configuration for a simulation engine.
//!
//! Builds fully-populated parameter records for the three cache roles of the
//! example pipeline (L1 instruction, L1 data, L2) from hard-coded defaults
//! plus optional per-role overrides, resolving replacement-policy names
//! through an immutable [`PolicyTable`]. The resolved [`CacheSpec`] records
//! are serialized and handed to the engine's object constructors; all
//! timing, eviction, and port semantics live in the engine, not here.
//!
//! ```
//! use cache_configurator::{CacheRole, Configurator, OverrideSet, PolicyTable};
//!
//! let configurator = Configurator::new(PolicyTable::builtin());
//! let spec = configurator
//!     .build(CacheRole::L2, &OverrideSet::default())
//!     .unwrap();
//! assert_eq!(spec.size, "256kB");
//! assert_eq!(spec.replacement_policy.class(), "LRURP");
//! ```

pub mod configurator;
pub mod error;
pub mod logger;
pub mod overrides;
pub mod policy;
pub mod spec;

pub use configurator::{Configurator, HierarchyPlan};
pub use error::ConfigError;
pub use overrides::{HierarchyOverrides, OverrideSet};
pub use policy::{PolicyHandle, PolicyTable};
pub use spec::{CacheRole, CacheSpec};

pub type Result<T> = std::result::Result<T, ConfigError>;
