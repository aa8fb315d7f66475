//! Handler for the `band` command.

use serde_json::json;

use super::command::BandArgs;
use super::output;
use crate::application::banding::{format_price_band, marketable_limit};
use crate::error::Result;

/// Execute `band`.
pub fn execute(args: &BandArgs) -> Result<()> {
    let price = marketable_limit(args.side, args.bid, args.ask, args.offset_bps, args.cap_bps)?;
    let line = format_price_band(
        &args.symbol,
        args.side,
        args.bid,
        args.ask,
        args.offset_bps,
        args.cap_bps,
    )?;

    if output::is_json() {
        output::json_output(json!({
            "command": "band",
            "symbol": args.symbol,
            "side": args.side,
            "limit": price.to_string(),
            "line": line,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        println!("{price}");
        return Ok(());
    }

    output::section("Price Band");
    output::field("Limit", output::highlight(price));
    output::lines(&line);
    Ok(())
}
