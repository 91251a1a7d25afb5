//! gcs archetypes - List the archetypes of a setting

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::genesys::{Archetype, Attribute};

#[derive(Args, Debug)]
pub struct ArchetypesArgs {
    /// Show characteristics and starting thresholds
    #[arg(long, short = 'l')]
    pub long: bool,
}

pub fn run(ctx: &AppContext, args: &ArchetypesArgs) -> Result<()> {
    let setting = ctx.load_setting()?;
    debug!(count = setting.archetypes.len(), "listing archetypes");

    if ctx.is_robot() {
        return emit_json(&robot_ok(&setting.archetypes));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Archetypes ({})", setting.name));
    for (index, archetype) in setting.archetypes.iter().enumerate() {
        layout.push_line(format!("{index:2}) {}", archetype.name));
        if args.long {
            layout.push_line(format!("    {}", summary(archetype)));
        }
    }
    emit_human(&layout);
    Ok(())
}

fn summary(archetype: &Archetype) -> String {
    let scores = Attribute::ALL
        .iter()
        .map(|attribute| format!("{} {}", attribute.name(), archetype.attributes.get(*attribute)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{scores}; wound {}, strain {}, experience {}",
        archetype.wound, archetype.strain, archetype.experience
    )
}
