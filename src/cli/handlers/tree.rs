//! Handler for the `tree` command.

use anyhow::{Context, Result};

use super::print_warnings;
use crate::cli::TreeArgs;
use crate::cli::config::Config;
use crate::cli::output::render_rows;
use crate::domain::AccessGuard;
use crate::index::Catalog;
use crate::tree::{ExpandedSet, build_rows};

/// Renders the tree for `args` without printing it.
pub(crate) fn tree_output(args: &TreeArgs, catalog: &Catalog) -> Result<String> {
    let expanded: ExpandedSet = if args.expand_all {
        catalog.tree().folders().iter().cloned().collect()
    } else {
        ExpandedSet::default()
    };
    let query = args.query.as_deref().unwrap_or("");
    let rows = build_rows(catalog.tree(), &expanded, query);
    render_rows(&rows, &expanded, args.format).context("failed to render tree")
}

pub fn handle_tree(args: &TreeArgs, config: &Config, guard: &impl AccessGuard) -> Result<()> {
    let catalog = Catalog::load(&config.folders, guard);
    print_warnings(catalog.warnings());

    let output = tree_output(args, &catalog)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
