use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use crate::catalog;

#[derive(Args)]
pub struct TagsArgs {
    /// Wire type name of a polymorphic base, e.g. `authenticationListener`
    #[arg(short, long)]
    model: String,
}

impl TagsArgs {
    pub fn run(&self) -> Result<()> {
        let entry = catalog::find(&self.model)
            .with_context(|| format!("unknown model `{}`", self.model))?;
        let Some(tags) = entry.tags else {
            anyhow::bail!("`{}` has no subtypes to discriminate", entry.name);
        };

        let mut stdout = std::io::stdout().lock();
        for tag in tags() {
            writeln!(stdout, "{tag}")?;
        }
        Ok(())
    }
}

/// Print every model name, marking polymorphic bases.
pub fn list_models() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for entry in catalog::models() {
        if entry.tags.is_some() {
            writeln!(stdout, "{} (polymorphic)", entry.name)?;
        } else {
            writeln!(stdout, "{}", entry.name)?;
        }
    }
    Ok(())
}
