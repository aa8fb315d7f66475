//! Handler for the `suggest` command and shared reaction rendering.

use chrono::Utc;
use serde_json::{json, Value};
use tabled::{Table, Tabled};

use super::command::SuggestArgs;
use super::{config, output};
use crate::application::pipeline::ResolutionRequest;
use crate::application::reactor::Reaction;
use crate::domain::{OperatingMode, Side, TradePlan, Whitelist};
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Rationale")]
    rationale: String,
}

impl PlanRow {
    fn new(rank: usize, plan: &TradePlan) -> Self {
        Self {
            rank,
            line: plan.line.clone(),
            class: plan
                .asset_class
                .map_or_else(|| "-".to_string(), |class| class.to_string()),
            score: plan.confidence.to_string(),
            rationale: plan.rationale.clone(),
        }
    }
}

/// Execute `suggest`.
pub fn execute(args: &SuggestArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let reactor = bootstrap::build_reactor(&config)?;

    let whitelist = args
        .whitelist
        .as_deref()
        .map_or_else(|| config.universe.whitelist(), Whitelist::parse);
    let mut request = ResolutionRequest::new(args.text.as_str()).with_whitelist(whitelist);
    if let Some(label) = &args.label {
        request = request.with_label(label.as_str());
    }
    if args.etf_only {
        request = request.with_mode(OperatingMode::EtfOnly);
    }

    let now = args.at.unwrap_or_else(Utc::now);
    let reaction = reactor.react_to(request, now);
    print_reaction(&args.text, &reaction);
    Ok(())
}

/// JSON document printed for one reaction under `--json`.
fn reaction_document(command: &str, text: &str, reaction: &Reaction) -> Value {
    json!({
        "command": command,
        "text": text,
        "reaction": reaction,
    })
}

/// Print `reaction` for `--json` or `--quiet`; returns false when neither
/// is active and the caller should render it for humans.
///
/// Quiet mode prints the bare plan lines so they can be piped.
pub(crate) fn print_machine_readable(command: &str, text: &str, reaction: &Reaction) -> bool {
    if output::is_json() {
        output::json_output(reaction_document(command, text, reaction));
        return true;
    }
    if output::is_quiet() {
        for plan in &reaction.plans {
            println!("{}", plan.line);
        }
        return true;
    }
    false
}

/// Print one reaction in the active output mode.
pub(crate) fn print_reaction(text: &str, reaction: &Reaction) {
    if print_machine_readable("suggest", text, reaction) {
        return;
    }

    output::section("Headline");
    output::field("Text", text);
    output::field("Label", output::highlight(&reaction.label));
    let side = match reaction.side {
        Side::Buy => output::positive(reaction.side),
        Side::Sell => output::negative(reaction.side),
    };
    output::field("Side", side);
    output::field("Mode", reaction.mode);
    output::field("Session", reaction.session);
    if output::verbosity() > 0 {
        output::field("Elapsed", format!("{}us", reaction.elapsed_us));
    }

    output::section("Plans");
    let rows: Vec<PlanRow> = reaction
        .plans
        .iter()
        .enumerate()
        .map(|(i, plan)| PlanRow::new(i + 1, plan))
        .collect();
    output::lines(&Table::new(rows).to_string());

    if reaction.mode == OperatingMode::EtfOnly {
        output::note("ETF_ONLY: single names, futures and options withheld");
    }
    if !reaction.session.is_open() {
        output::warning(&format!("Market {}", reaction.session.reason()));
    }
}
