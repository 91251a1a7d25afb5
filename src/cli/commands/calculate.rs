//! gcs calculate - Build character sheets from character files

use std::path::{Path, PathBuf};

use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok, robot_partial};
use crate::error::{GcsError, Result};
use crate::genesys::{
    Attribute, CalculatedCharacter, Calculation, CalculationWarning, SkillRows,
};
use crate::setting::read_character_file;

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Character files (YAML)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// List only trained skills; a skill missing from the setting is an error
    #[arg(long)]
    pub sparse: bool,
}

pub fn run(ctx: &AppContext, args: &CalculateArgs) -> Result<()> {
    let setting = ctx.load_setting()?;
    let rows = if args.sparse {
        SkillRows::Sparse
    } else {
        ctx.config.sheet.skill_rows
    };
    let calculator = setting.calculator().with_skill_rows(rows);
    debug!(files = args.files.len(), %rows, "calculating characters");

    let mut outcomes: Vec<(&Path, Result<Calculation>)> = args
        .files
        .par_iter()
        .map(|path| {
            let result =
                read_character_file(path).and_then(|character| calculator.calculate(&character));
            (path.as_path(), result)
        })
        .collect();

    for (path, outcome) in &outcomes {
        if let Ok(calculation) = outcome {
            for warning in &calculation.warnings {
                warn!(file = %path.display(), "{warning}");
            }
        }
    }

    // A single file reports its own error directly.
    if outcomes.len() == 1 && outcomes[0].1.is_err() {
        if let Some((_, Err(err))) = outcomes.pop() {
            return Err(err);
        }
    }

    let failed = outcomes.iter().filter(|(_, outcome)| outcome.is_err()).count();

    if ctx.is_robot() {
        let entries: Vec<SheetEntry> = outcomes
            .iter()
            .map(|(path, outcome)| SheetEntry::new(path, outcome, ctx.config.robot.include_warnings))
            .collect();
        let completed = entries.len() - failed;
        if failed == 0 {
            emit_json(&robot_ok(entries))?;
        } else {
            emit_json(&robot_partial(completed, failed, entries))?;
        }
    } else {
        for (index, (path, outcome)) in outcomes.iter().enumerate() {
            if index > 0 {
                println!();
            }
            match outcome {
                Ok(calculation) => emit_human(&render_sheet(
                    calculation,
                    ctx.config.sheet.show_untrained,
                )),
                Err(err) => eprintln!("Error: {}: {err}", path.display()),
            }
        }
    }

    if failed > 0 {
        return Err(GcsError::InvalidData(format!(
            "{failed} of {} character files failed",
            outcomes.len()
        )));
    }
    Ok(())
}

/// Human-readable sheet for one calculated character.
#[must_use]
pub fn render_sheet(calculation: &Calculation, show_untrained: bool) -> HumanLayout {
    let character = &calculation.character;
    let mut layout = HumanLayout::new();
    layout.title(display_name(character));
    layout.kv("Archetype", &character.archetype);
    if !character.player.is_empty() {
        layout.kv("Player", &character.player);
    }
    if !character.profession.is_empty() {
        layout.kv("Profession", &character.profession);
    }
    layout.kv("Experience", &character.experience.to_string());

    layout.section("Characteristics");
    for attribute in Attribute::ALL {
        layout.kv(attribute.name(), &character.attributes.get(attribute).to_string());
    }

    layout.section("Skills");
    for skill in character.skills.values() {
        if !show_untrained && skill.proficiency_dice == 0 {
            continue;
        }
        layout.push_line(format!(
            "{:<24} {:<10} {:>3} proficiency {:>3} ability",
            skill.name, skill.ability, skill.proficiency_dice, skill.ability_dice
        ));
    }

    if !character.talents.is_empty() {
        layout.section("Talents");
        for entry in character.talents.values() {
            let rank = if entry.talent.ranked {
                format!(", rank {}", entry.rank)
            } else {
                String::new()
            };
            layout.bullet(&format!(
                "{} (tier {}{rank}): {}",
                entry.talent.name, entry.talent.tier, entry.talent.gives
            ));
        }
    }

    if !calculation.warnings.is_empty() {
        layout.section("Warnings");
        for warning in &calculation.warnings {
            layout.bullet(&warning.to_string());
        }
    }

    layout
}

fn display_name(character: &CalculatedCharacter) -> &str {
    if character.name.is_empty() {
        "(unnamed)"
    } else {
        &character.name
    }
}

#[derive(Serialize)]
struct SheetEntry<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    character: Option<&'a CalculatedCharacter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a [CalculationWarning]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<EntryError>,
}

#[derive(Serialize)]
struct EntryError {
    code: &'static str,
    message: String,
}

impl<'a> SheetEntry<'a> {
    fn new(path: &Path, outcome: &'a Result<Calculation>, include_warnings: bool) -> Self {
        let file = path.display().to_string();
        match outcome {
            Ok(calculation) => Self {
                file,
                character: Some(&calculation.character),
                warnings: include_warnings.then_some(calculation.warnings.as_slice()),
                error: None,
            },
            Err(err) => Self {
                file,
                character: None,
                warnings: None,
                error: Some(EntryError {
                    code: err.code(),
                    message: err.to_string(),
                }),
            },
        }
    }
}
