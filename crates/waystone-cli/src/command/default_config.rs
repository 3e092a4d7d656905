use std::path::PathBuf;

use crate::{schema::config::HighlightConfig, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DefaultConfigArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DefaultConfigArg) -> anyhow::Result<()> {
    Output::save_json(&HighlightConfig::default(), arg.output.clone())
}
