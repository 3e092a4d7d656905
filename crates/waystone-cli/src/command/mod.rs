use clap::{Parser, Subcommand};

use self::{
    default_config::DefaultConfigArg, evaluate::EvaluateArg, parse_banned::ParseBannedArg,
};

mod default_config;
mod evaluate;
mod parse_banned;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score and classify waystones from an item file
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Show how a banned modifier string is parsed
    ParseBanned(#[clap(flatten)] ParseBannedArg),
    /// Write the default highlight configuration
    DefaultConfig(#[clap(flatten)] DefaultConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(&args.log_level);
    match args.mode {
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::ParseBanned(arg) => parse_banned::run(&arg)?,
        Mode::DefaultConfig(arg) => default_config::run(&arg)?,
    }
    Ok(())
}
