//! gcs settings - List settings in the data directory

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SettingsArgs {}

#[derive(Serialize)]
struct SettingsReport<'a> {
    data_dir: String,
    selected: &'a str,
    settings: Vec<String>,
}

pub fn run(ctx: &AppContext, _args: &SettingsArgs) -> Result<()> {
    let settings = ctx.loader.available()?;

    if ctx.is_robot() {
        return emit_json(&robot_ok(SettingsReport {
            data_dir: ctx.loader.data_dir().display().to_string(),
            selected: &ctx.setting_name,
            settings,
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Settings");
    layout.kv("Data dir", &ctx.loader.data_dir().display().to_string());
    layout.section("Available");
    for name in &settings {
        let marker = if *name == ctx.setting_name { " *" } else { "" };
        layout.bullet(&format!("{name}{marker}"));
    }
    emit_human(&layout);
    Ok(())
}
