//! Handler for the `session` command.

use chrono::Utc;
use serde_json::json;

use super::command::SessionArgs;
use super::{config, output};
use crate::application::session::SessionGate;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Execute `session`.
pub fn execute(args: &SessionArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let calendar = bootstrap::build_calendar(&config)?;
    let now = args.at.unwrap_or_else(Utc::now);
    let state = SessionGate::new(calendar.as_ref()).classify(now);

    if output::is_json() {
        output::json_output(json!({
            "command": "session",
            "at": now.to_rfc3339(),
            "session": state,
            "policy": config.session.policy,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        println!("{}", state.reason());
        return Ok(());
    }

    output::section("Session");
    output::field("At", now.to_rfc3339());
    let shown = if state.is_open() {
        output::positive(state)
    } else {
        output::negative(state)
    };
    output::field("State", shown);
    output::field("Policy", format!("{:?}", config.session.policy).to_lowercase());
    Ok(())
}
