use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use chrono::Utc;
use waystone_evaluator::{decision::CraftPrefixPolicy, evaluator::PassSummary};

use crate::{
    schema::{
        config::HighlightConfig,
        item_record::ItemRecord,
        report::{EvaluationReport, ReportEntry},
    },
    util::{self, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Item records JSON file
    #[arg(long)]
    items: PathBuf,
    /// Highlight configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Banned modifier string, replacing the configured one
    #[arg(long)]
    banned: Option<String>,
    /// Craft prefix policy (rare_only or all_rarities), replacing the configured one
    #[arg(long)]
    craft_prefix_policy: Option<CraftPrefixPolicy>,
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        items,
        config,
        banned,
        craft_prefix_policy,
        format,
        output,
    } = arg;

    let mut config = util::read_config_file(config.as_deref())?;
    if let Some(banned) = banned {
        config.banned_modifiers.clone_from(banned);
    }
    if let Some(policy) = craft_prefix_policy {
        config.craft_prefix_policy = *policy;
    }

    let records = util::read_items_file(items)?;
    tracing::info!(count = records.len(), path = %items.display(), "loaded item records");
    let report = build_report(&records, config);

    let mut output = Output::create(output.clone())?;
    match format {
        OutputFormat::Json => output.write_json(&report)?,
        OutputFormat::Table => {
            write_table(&mut output, &report)
                .with_context(|| format!("Failed to write table to {}", output.label()))?;
            output.finish()?;
        }
    }
    Ok(())
}

fn build_report(records: &[ItemRecord], config: HighlightConfig) -> EvaluationReport {
    let evaluator = config.build_evaluator();
    let snapshots = records
        .iter()
        .map(ItemRecord::to_snapshot)
        .collect::<Vec<_>>();
    let evaluations = evaluator.evaluate_all(&snapshots);

    EvaluationReport {
        evaluated_at: Utc::now(),
        summary: PassSummary::from_evaluations(&evaluations),
        banned_modifiers: evaluator.banned_modifiers().entries().to_vec(),
        config,
        items: records
            .iter()
            .zip(evaluations)
            .enumerate()
            .map(|(index, (record, evaluation))| ReportEntry {
                index,
                name: record.name.clone(),
                tier: record.tier,
                evaluation,
            })
            .collect(),
    }
}

fn write_table<W>(output: &mut W, report: &EvaluationReport) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        output,
        "{:>4}  {:<24} {:>4}  {:<16} {:>6}  {:>3} {:>3}  {:>4} {:>4}  {:>2}",
        "#", "name", "tier", "class", "score", "P", "S", "IIQ", "IIR", "+1"
    )?;
    for entry in &report.items {
        let evaluation = &entry.evaluation;
        if !evaluation.should_render() {
            writeln!(
                output,
                "{:>4}  {:<24} {:>4}  (below minimum tier)",
                entry.index,
                entry.name.as_deref().unwrap_or("-"),
                entry.tier
            )?;
            continue;
        }
        writeln!(
            output,
            "{:>4}  {:<24} {:>4}  {:<16} {:>6}  {:>3} {:>3}  {:>4} {:>4}  {:>2}",
            entry.index,
            entry.name.as_deref().unwrap_or("-"),
            entry.tier,
            evaluation.classification.to_string(),
            evaluation.score,
            evaluation.prefix_count,
            evaluation.suffix_count,
            evaluation.stats.item_quantity,
            evaluation.stats.item_rarity_bonus,
            if evaluation.stats.has_extra_rare_monster_modifier {
                "+1"
            } else {
                ""
            },
        )?;
    }
    let summary = &report.summary;
    writeln!(
        output,
        "\n{} items: {} run, {} craft, {} craft above rare, {} banned, {} below minimum tier",
        summary.total,
        summary.run,
        summary.craft,
        summary.craft_above_rare,
        summary.banned,
        summary.below_minimum_tier
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ItemRecord> {
        serde_json::from_str(
            r#"[
                {
                    "name": "Good Waystone",
                    "tier": 12,
                    "rarity": "rare",
                    "prefix_count": 2,
                    "suffix_count": 1,
                    "modifiers": [
                        { "identifier": "MapDroppedItemQuantityIncrease", "display_text": "Bountiful", "values": [10, 5] },
                        { "identifier": "MapRareMonstersAdditionalModifier", "display_text": "of Hardship" }
                    ]
                },
                { "name": "Low Waystone", "tier": 3, "rarity": "magic" }
            ]"#,
        )
        .unwrap()
    }

    fn config() -> HighlightConfig {
        let mut config = HighlightConfig::default();
        config.weights.minimum_tier = 5;
        config
    }

    #[test]
    fn test_build_report() {
        let report = build_report(&records(), config());
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.below_minimum_tier, 1);

        let good = &report.items[0].evaluation;
        // 10*4 + 5*1 + 40
        assert_eq!(good.score, 85);
        assert_eq!(good.classification.to_string(), "CraftAboveRare");
        assert!(report.items[1].evaluation.below_minimum_tier);
        assert_eq!(report.banned_modifiers, ["unwavering", "penetration"]);
    }

    #[test]
    fn test_write_table() {
        let report = build_report(&records(), config());
        let mut buf = Vec::<u8>::new();
        write_table(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert!(lines[0].contains("class"));
        assert!(lines[1].contains("Good Waystone"));
        assert!(lines[1].contains("CraftAboveRare"));
        assert!(lines[1].contains("85"));
        assert!(lines[1].contains("+1"));
        assert!(lines[2].contains("Low Waystone"));
        assert!(lines[2].contains("(below minimum tier)"));
        assert_eq!(
            lines.last().copied(),
            Some(
                "2 items: 0 run, 0 craft, 1 craft above rare, 0 banned, 1 below minimum tier"
            )
        );
    }

    #[test]
    fn test_policy_flag_accepts_config_spelling() {
        use clap::Parser as _;

        let args = crate::command::CommandArgs::try_parse_from([
            "waystone",
            "evaluate",
            "--items",
            "items.json",
            "--craft-prefix-policy",
            "all_rarities",
        ]);
        assert!(args.is_ok());
    }
}
