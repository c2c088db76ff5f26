use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::policy::PolicyHandle;

const fn nz(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(v) => v,
        None => panic!("cache parameter defaults must be non-zero"),
    }
}

/// The three cache roles of the example pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRole {
    L1Instruction,
    L1Data,
    L2,
}

impl CacheRole {
    pub const ALL: [CacheRole; 3] = [CacheRole::L1Instruction, CacheRole::L1Data, CacheRole::L2];

    /// Hard-coded defaults for this role.
    pub fn defaults(self) -> &'static RoleDefaults {
        match self {
            CacheRole::L1Instruction => &L1I_DEFAULTS,
            CacheRole::L1Data => &L1D_DEFAULTS,
            CacheRole::L2 => &L2_DEFAULTS,
        }
    }
}

impl fmt::Display for CacheRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheRole::L1Instruction => "L1I",
            CacheRole::L1Data => "L1D",
            CacheRole::L2 => "L2",
        };
        f.write_str(name)
    }
}

/// Baseline parameter values for one cache role, before overrides.
///
/// The replacement policy is kept as a name here and resolved through the
/// policy table at build time, so a broken default would fail the same way
/// a broken override does.
#[derive(Debug)]
pub struct RoleDefaults {
    pub size: &'static str,
    pub assoc: NonZeroUsize,
    pub tag_latency: NonZeroUsize,
    pub data_latency: NonZeroUsize,
    pub response_latency: NonZeroUsize,
    pub mshrs: NonZeroUsize,
    pub tgts_per_mshr: NonZeroUsize,
    pub replacement_policy: &'static str,
}

static L1I_DEFAULTS: RoleDefaults = RoleDefaults {
    size: "16kB",
    assoc: nz(2),
    tag_latency: nz(2),
    data_latency: nz(2),
    response_latency: nz(2),
    mshrs: nz(4),
    tgts_per_mshr: nz(20),
    replacement_policy: "LRU",
};

static L1D_DEFAULTS: RoleDefaults = RoleDefaults {
    size: "64kB",
    assoc: nz(2),
    tag_latency: nz(2),
    data_latency: nz(2),
    response_latency: nz(2),
    mshrs: nz(4),
    tgts_per_mshr: nz(20),
    replacement_policy: "LRU",
};

static L2_DEFAULTS: RoleDefaults = RoleDefaults {
    size: "256kB",
    assoc: nz(8),
    tag_latency: nz(20),
    data_latency: nz(20),
    response_latency: nz(20),
    mshrs: nz(20),
    tgts_per_mshr: nz(12),
    replacement_policy: "LRU",
};

/// Fully-resolved parameter set for one cache, ready to hand to the engine's
/// object constructor.
///
/// `size` stays an opaque unit string ("16kB"); parsing it is the engine's
/// job. Latencies are cycle counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSpec {
    pub size: String,
    pub assoc: NonZeroUsize,
    pub tag_latency: NonZeroUsize,
    pub data_latency: NonZeroUsize,
    pub response_latency: NonZeroUsize,
    pub mshrs: NonZeroUsize,
    pub tgts_per_mshr: NonZeroUsize,
    pub replacement_policy: PolicyHandle,
}
