//! gcs skills - List the skills of a setting

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::genesys::Skill;

#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Only skills governed by this characteristic (case-insensitive)
    #[arg(long)]
    pub ability: Option<String>,
}

pub fn run(ctx: &AppContext, args: &SkillsArgs) -> Result<()> {
    let setting = ctx.load_setting()?;
    let skills: Vec<&Skill> = setting
        .skills
        .iter()
        .filter(|skill| {
            args.ability
                .as_deref()
                .is_none_or(|ability| skill.ability.eq_ignore_ascii_case(ability))
        })
        .collect();
    debug!(count = skills.len(), filter = ?args.ability, "listing skills");

    if ctx.is_robot() {
        return emit_json(&robot_ok(&skills));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Skills ({})", setting.name));
    for skill in &skills {
        let marker = if skill.governing_attribute().is_some() {
            ""
        } else {
            "  (unknown characteristic)"
        };
        layout.push_line(format!("{:<24} {}{marker}", skill.name, skill.ability));
    }
    emit_human(&layout);
    Ok(())
}
