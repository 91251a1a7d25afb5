//! gcs talents - List the talents of a setting

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::genesys::Talent;

#[derive(Args, Debug)]
pub struct TalentsArgs {
    /// Only talents of this tier
    #[arg(long)]
    pub tier: Option<u8>,
}

pub fn run(ctx: &AppContext, args: &TalentsArgs) -> Result<()> {
    let setting = ctx.load_setting()?;
    let mut talents: Vec<&Talent> = setting
        .talents
        .iter()
        .filter(|talent| args.tier.is_none_or(|tier| talent.tier == tier))
        .collect();
    talents.sort_by_key(|talent| talent.tier);
    debug!(count = talents.len(), tier = ?args.tier, "listing talents");

    if ctx.is_robot() {
        return emit_json(&robot_ok(&talents));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Talents ({})", setting.name));
    for talent in &talents {
        let ranked = if talent.ranked { ", ranked" } else { "" };
        layout.bullet(&format!(
            "{} (tier {}{ranked}): {}",
            talent.name, talent.tier, talent.gives
        ));
    }
    emit_human(&layout);
    Ok(())
}
