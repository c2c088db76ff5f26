use log::debug;
use serde::Serialize;

use crate::{
    overrides::{HierarchyOverrides, OverrideSet},
    policy::PolicyTable,
    spec::{CacheRole, CacheSpec},
    Result,
};

/// Builds resolved [`CacheSpec`] records from role defaults plus overrides.
///
/// The policy table is injected at construction and never mutated, so one
/// configurator can serve concurrent builds through `&self`.
#[derive(Debug, Clone)]
pub struct Configurator {
    policies: PolicyTable,
}

impl Configurator {
    pub fn new(policies: PolicyTable) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Resolves one role: defaults, then field-by-field overrides, then the
    /// policy lookup. Fails with `UnknownPolicy` if the effective policy
    /// name is not in the table; no partial spec is produced.
    pub fn build(&self, role: CacheRole, overrides: &OverrideSet) -> Result<CacheSpec> {
        let defaults = role.defaults();

        let policy_name = overrides
            .replacement_policy
            .as_deref()
            .unwrap_or(defaults.replacement_policy);
        let replacement_policy = self.policies.resolve(policy_name)?;

        let spec = CacheSpec {
            size: overrides
                .size
                .clone()
                .unwrap_or_else(|| defaults.size.to_string()),
            assoc: overrides.assoc.unwrap_or(defaults.assoc),
            tag_latency: overrides.tag_latency.unwrap_or(defaults.tag_latency),
            data_latency: overrides.data_latency.unwrap_or(defaults.data_latency),
            response_latency: overrides
                .response_latency
                .unwrap_or(defaults.response_latency),
            mshrs: overrides.mshrs.unwrap_or(defaults.mshrs),
            tgts_per_mshr: overrides.tgts_per_mshr.unwrap_or(defaults.tgts_per_mshr),
            replacement_policy,
        };
        debug!(
            "{role}: size={} assoc={} policy={}",
            spec.size,
            spec.assoc,
            spec.replacement_policy.class()
        );
        Ok(spec)
    }

    /// Resolves all three roles; the first failure aborts the build.
    pub fn build_hierarchy(&self, overrides: &HierarchyOverrides) -> Result<HierarchyPlan> {
        Ok(HierarchyPlan {
            l1i: self.build(CacheRole::L1Instruction, &overrides.l1i)?,
            l1d: self.build(CacheRole::L1Data, &overrides.l1d)?,
            l2: self.build(CacheRole::L2, &overrides.l2)?,
        })
    }
}

/// Resolved specs for the whole hierarchy; serialized as the handoff record
/// for the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyPlan {
    pub l1i: CacheSpec,
    pub l1d: CacheSpec,
    pub l2: CacheSpec,
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConfigError;

    fn configurator() -> Configurator {
        Configurator::new(PolicyTable::builtin())
    }

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_overrides_yield_the_default_rows() {
        let configurator = configurator();
        for role in CacheRole::ALL {
            let spec = configurator.build(role, &OverrideSet::default()).unwrap();
            let d = role.defaults();
            assert_eq!(spec.size, d.size);
            assert_eq!(spec.assoc, d.assoc);
            assert_eq!(spec.tag_latency, d.tag_latency);
            assert_eq!(spec.data_latency, d.data_latency);
            assert_eq!(spec.response_latency, d.response_latency);
            assert_eq!(spec.mshrs, d.mshrs);
            assert_eq!(spec.tgts_per_mshr, d.tgts_per_mshr);
            assert_eq!(spec.replacement_policy.class(), "LRURP");
        }
    }

    #[test]
    fn single_field_override_changes_only_that_field() {
        let configurator = configurator();
        for role in CacheRole::ALL {
            let baseline = configurator.build(role, &OverrideSet::default()).unwrap();

            let overrides = OverrideSet {
                size: Some("1MB".to_string()),
                ..OverrideSet::default()
            };
            let spec = configurator.build(role, &overrides).unwrap();
            assert_eq!(spec.size, "1MB");
            assert_eq!(
                CacheSpec {
                    size: baseline.size.clone(),
                    ..spec
                },
                baseline
            );

            let overrides = OverrideSet {
                mshrs: Some(nz(32)),
                ..OverrideSet::default()
            };
            let spec = configurator.build(role, &overrides).unwrap();
            assert_eq!(spec.mshrs, nz(32));
            assert_eq!(
                CacheSpec {
                    mshrs: baseline.mshrs,
                    ..spec
                },
                baseline
            );
        }
    }

    #[test]
    fn build_is_idempotent() {
        let configurator = configurator();
        let overrides = OverrideSet {
            assoc: Some(nz(4)),
            replacement_policy: Some("FIFO".to_string()),
            ..OverrideSet::default()
        };
        let first = configurator
            .build(CacheRole::L1Data, &overrides)
            .unwrap();
        let second = configurator
            .build(CacheRole::L1Data, &overrides)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn l2_size_and_policy_override_scenario() {
        let overrides = OverrideSet {
            size: Some("512kB".to_string()),
            replacement_policy: Some("Random".to_string()),
            ..OverrideSet::default()
        };
        let spec = configurator().build(CacheRole::L2, &overrides).unwrap();
        assert_eq!(spec.size, "512kB");
        assert_eq!(spec.assoc, nz(8));
        assert_eq!(spec.tag_latency, nz(20));
        assert_eq!(spec.data_latency, nz(20));
        assert_eq!(spec.response_latency, nz(20));
        assert_eq!(spec.mshrs, nz(20));
        assert_eq!(spec.tgts_per_mshr, nz(12));
        assert_eq!(spec.replacement_policy.class(), "RandomRP");
    }

    #[test]
    fn bogus_policy_fails_the_build() {
        let overrides = OverrideSet {
            replacement_policy: Some("Bogus".to_string()),
            ..OverrideSet::default()
        };
        let err = configurator()
            .build(CacheRole::L1Instruction, &overrides)
            .unwrap_err();
        match err {
            ConfigError::UnknownPolicy { name, .. } => assert_eq!(name, "Bogus"),
            other => panic!("expected UnknownPolicy, got {other:?}"),
        }
    }

    #[test]
    fn hierarchy_build_applies_per_role_overrides() {
        let overrides: HierarchyOverrides = serde_json::from_str(
            r#"{
                "l1i": {"size": "32kB"},
                "l2": {"replacement_policy": "FIFO"}
            }"#,
        )
        .unwrap();
        let plan = configurator().build_hierarchy(&overrides).unwrap();
        assert_eq!(plan.l1i.size, "32kB");
        assert_eq!(plan.l1d.size, "64kB");
        assert_eq!(plan.l2.replacement_policy.class(), "FIFORP");
    }

    #[test]
    fn concurrent_builds_share_one_configurator() {
        let configurator = configurator();
        std::thread::scope(|s| {
            for role in CacheRole::ALL {
                let configurator = &configurator;
                let _ = s.spawn(move || {
                    let spec = configurator.build(role, &OverrideSet::default()).unwrap();
                    assert_eq!(spec.size, role.defaults().size);
                });
            }
        });
    }

    #[test]
    fn plan_serializes_engine_parameter_names() {
        let plan = configurator()
            .build_hierarchy(&HierarchyOverrides::default())
            .unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["l1i"]["size"], "16kB");
        assert_eq!(json["l1i"]["tgts_per_mshr"], 20);
        assert_eq!(json["l2"]["replacement_policy"], "LRURP");
    }
}
