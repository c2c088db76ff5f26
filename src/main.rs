use std::fs;
use std::num::NonZeroUsize;

use clap::Parser;
use log::info;

use cache_configurator::{logger, Configurator, HierarchyOverrides, PolicyTable, Result};

#[derive(clap::Parser, Debug)]
struct Args {
    /// Whether should print debug information
    #[arg(long)]
    debug: bool,

    /// Path to a JSON file with per-level parameter overrides
    #[arg(short, long)]
    config: Option<String>,

    /// Where to write the resolved hierarchy (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// L1 instruction cache size. Default: 16kB
    #[arg(long)]
    l1i_size: Option<String>,

    /// L1 instruction cache assoc. Default: 2
    #[arg(long)]
    l1i_assoc: Option<NonZeroUsize>,

    /// L1 instruction cache replacement policy. Default: LRU
    #[arg(long)]
    l1i_rp: Option<String>,

    /// L1 data cache size. Default: 64kB
    #[arg(long)]
    l1d_size: Option<String>,

    /// L1 data cache assoc. Default: 2
    #[arg(long)]
    l1d_assoc: Option<NonZeroUsize>,

    /// L1 data cache replacement policy. Default: LRU
    #[arg(long)]
    l1d_rp: Option<String>,

    /// L2 cache size. Default: 256kB
    #[arg(long)]
    l2_size: Option<String>,

    /// L2 cache assoc. Default: 8
    #[arg(long)]
    l2_assoc: Option<NonZeroUsize>,

    /// L2 cache replacement policy. Default: LRU
    #[arg(long)]
    l2_rp: Option<String>,
}

impl Args {
    /// Folds the command-line flags into the override sets. Flags win over
    /// the override file, field by field.
    fn apply_to(&self, overrides: &mut HierarchyOverrides) {
        if let Some(size) = &self.l1i_size {
            overrides.l1i.size = Some(size.clone());
        }
        if let Some(assoc) = self.l1i_assoc {
            overrides.l1i.assoc = Some(assoc);
        }
        if let Some(rp) = &self.l1i_rp {
            overrides.l1i.replacement_policy = Some(rp.clone());
        }
        if let Some(size) = &self.l1d_size {
            overrides.l1d.size = Some(size.clone());
        }
        if let Some(assoc) = self.l1d_assoc {
            overrides.l1d.assoc = Some(assoc);
        }
        if let Some(rp) = &self.l1d_rp {
            overrides.l1d.replacement_policy = Some(rp.clone());
        }
        if let Some(size) = &self.l2_size {
            overrides.l2.size = Some(size.clone());
        }
        if let Some(assoc) = self.l2_assoc {
            overrides.l2.assoc = Some(assoc);
        }
        if let Some(rp) = &self.l2_rp {
            overrides.l2.replacement_policy = Some(rp.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.debug);

    let mut overrides = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => HierarchyOverrides::default(),
    };
    args.apply_to(&mut overrides);

    let configurator = Configurator::new(PolicyTable::builtin());
    let plan = configurator.build_hierarchy(&overrides)?;

    info!(
        "resolved cache hierarchy: L1I {} / L1D {} / L2 {}",
        plan.l1i.size, plan.l1d.size, plan.l2.size
    );

    let json = serde_json::to_string_pretty(&plan)?;
    match &args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
