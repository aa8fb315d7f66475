//! Handler for the `watch` command.
//!
//! Reads headlines from stdin one line at a time and reacts to each. A line
//! already seen (after trimming) is skipped unless `--no-dedup` is given.

use std::collections::{HashSet, VecDeque};

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info};

use super::command::WatchArgs;
use super::{config, output, suggest};
use crate::application::reactor::Reaction;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Lines remembered for repeat suppression.
const SEEN_CAPACITY: usize = 4_096;

/// Bounded set of recently seen lines; the oldest entry is evicted first.
#[derive(Debug)]
pub struct SeenLines {
    order: VecDeque<String>,
    lines: HashSet<String>,
    capacity: usize,
}

impl SeenLines {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            lines: HashSet::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Record `line`; returns `false` if it was already present.
    pub fn insert(&mut self, line: &str) -> bool {
        if self.lines.contains(line) {
            return false;
        }
        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.lines.remove(&oldest);
            }
        }
        self.order.push_back(line.to_string());
        self.lines.insert(line.to_string());
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Execute `watch`.
pub async fn execute(args: &WatchArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let reactor = bootstrap::build_reactor(&config)?;
    let mut seen = SeenLines::new(SEEN_CAPACITY);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut processed = 0usize;

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::note("Reading headlines from stdin (Ctrl-C to stop)");
    }

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if !args.no_dedup && !seen.insert(text) {
            debug!(text, "Skipping repeated line");
            continue;
        }

        let reaction = reactor.react(text, Utc::now());
        print_watch_reaction(text, &reaction);
        processed += 1;
    }

    info!(processed, "Watch stopped");
    Ok(())
}

fn print_watch_reaction(text: &str, reaction: &Reaction) {
    if suggest::print_machine_readable("watch", text, reaction) {
        return;
    }

    let timestamp = Utc::now().format("%H:%M:%S").to_string();
    output::info(&timestamp, reaction.label.as_str(), text);
    for plan in &reaction.plans {
        output::note(&format!("{}  {}", plan.line, output::muted(plan.confidence)));
    }
}
