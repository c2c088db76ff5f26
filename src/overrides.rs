use std::num::NonZeroUsize;

use serde::Deserialize;

/// User-supplied partial parameter set for one cache role.
///
/// Every field is optional; `None` keeps the role default. Zero is not a
/// representable value for the numeric fields, so a zero in an override
/// file fails at deserialization rather than reaching the configurator.
/// Unknown keys are rejected outright — a typo'd field name must not be
/// silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideSet {
    pub size: Option<String>,
    pub assoc: Option<NonZeroUsize>,
    pub tag_latency: Option<NonZeroUsize>,
    pub data_latency: Option<NonZeroUsize>,
    pub response_latency: Option<NonZeroUsize>,
    pub mshrs: Option<NonZeroUsize>,
    pub tgts_per_mshr: Option<NonZeroUsize>,
    /// Unresolved policy name; looked up in the policy table at build time.
    pub replacement_policy: Option<String>,
}

impl OverrideSet {
    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.assoc.is_none()
            && self.tag_latency.is_none()
            && self.data_latency.is_none()
            && self.response_latency.is_none()
            && self.mshrs.is_none()
            && self.tgts_per_mshr.is_none()
            && self.replacement_policy.is_none()
    }
}

/// Override sets for the whole hierarchy; the shape of the `--config` JSON
/// file. Roles left out of the file get empty override sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HierarchyOverrides {
    #[serde(default)]
    pub l1i: OverrideSet,
    #[serde(default)]
    pub l1d: OverrideSet,
    #[serde(default)]
    pub l2: OverrideSet,
}
