//! gcs config - Show the effective configuration

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::config::Config;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the path of the global config file and exit
    #[arg(long)]
    pub path: bool,
}

#[derive(Serialize)]
struct ConfigReport<'a> {
    global_path: Option<String>,
    data_dir: String,
    setting: &'a str,
    config: &'a Config,
}

#[derive(Serialize)]
struct PathReport {
    global_path: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let global_path = Config::global_path().map(|path| path.display().to_string());

    if ctx.is_robot() {
        if args.path {
            return emit_json(&robot_ok(PathReport { global_path }));
        }
        return emit_json(&robot_ok(ConfigReport {
            global_path,
            data_dir: ctx.loader.data_dir().display().to_string(),
            setting: &ctx.setting_name,
            config: &ctx.config,
        }));
    }

    if args.path {
        println!("{}", global_path.unwrap_or_default());
        return Ok(());
    }

    println!("# data_dir in use: {}", ctx.loader.data_dir().display());
    println!("# setting in use: {}", ctx.setting_name);
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
