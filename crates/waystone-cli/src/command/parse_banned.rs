use std::path::PathBuf;

use waystone_evaluator::banned::BannedModifierList;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ParseBannedArg {
    /// Comma-separated banned modifier string
    banned: String,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ParseBannedArg) -> anyhow::Result<()> {
    let ParseBannedArg { banned, output } = arg;
    let list = BannedModifierList::parse(banned);
    Output::save_json(&list, output.clone())
}
