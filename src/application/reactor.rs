//! Orchestration around the pipeline.
//!
//! The reactor owns the parts that carry state between headlines: the
//! circuit breaker that picks the operating mode, the session gate and its
//! policy, and the catalog handle whose snapshot each run pins.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::catalog::CatalogHandle;
use super::circuit::{CircuitEvent, SharedCircuitBreaker};
use super::pipeline::{Pipeline, ResolutionRequest};
use super::session::SessionGate;
use crate::domain::{
    EventLabel, OperatingMode, SessionPolicy, SessionState, Side, TradePlan, Whitelist,
};
use crate::port::TradingCalendar;

/// Output of one reaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reaction {
    pub label: EventLabel,
    pub side: Side,
    pub mode: OperatingMode,
    pub session: SessionState,
    pub plans: Vec<TradePlan>,
    pub elapsed_us: u64,
}

/// Headline reactor.
pub struct Reactor {
    pipeline: Pipeline,
    catalogs: Arc<CatalogHandle>,
    breaker: SharedCircuitBreaker,
    calendar: Arc<dyn TradingCalendar>,
    policy: SessionPolicy,
    whitelist: Whitelist,
}

impl Reactor {
    #[must_use]
    pub fn new(
        pipeline: Pipeline,
        catalogs: Arc<CatalogHandle>,
        breaker: SharedCircuitBreaker,
        calendar: Arc<dyn TradingCalendar>,
    ) -> Self {
        Self {
            pipeline,
            catalogs,
            breaker,
            calendar,
            policy: SessionPolicy::default(),
            whitelist: Whitelist::All,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: SessionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = whitelist;
        self
    }

    #[must_use]
    pub const fn breaker(&self) -> &SharedCircuitBreaker {
        &self.breaker
    }

    #[must_use]
    pub fn catalogs(&self) -> &CatalogHandle {
        &self.catalogs
    }

    /// Record an upstream failure against the circuit breaker.
    pub fn record(&self, event: CircuitEvent, now: DateTime<Utc>) {
        self.breaker.record(event, now.timestamp_millis());
    }

    /// Session state at `now`.
    #[must_use]
    pub fn session(&self, now: DateTime<Utc>) -> SessionState {
        SessionGate::new(self.calendar.as_ref()).classify(now)
    }

    /// React to one headline with the configured whitelist.
    #[must_use]
    pub fn react(&self, text: &str, now: DateTime<Utc>) -> Reaction {
        let request = ResolutionRequest::new(text).with_whitelist(self.whitelist.clone());
        self.react_to(request, now)
    }

    /// React to a fully specified request.
    ///
    /// A degraded breaker forces ETF_ONLY regardless of the requested mode.
    #[must_use]
    pub fn react_to(&self, mut request: ResolutionRequest, now: DateTime<Utc>) -> Reaction {
        let start = Instant::now();

        let breaker_mode = self.breaker.next_mode(now.timestamp_millis());
        if breaker_mode == OperatingMode::EtfOnly {
            request.mode = OperatingMode::EtfOnly;
        }
        let session = self.session(now);
        let snapshot = self.catalogs.snapshot();

        let resolution = self.pipeline.run(&request, &snapshot);
        for _ in 0..resolution.dependency_failures {
            self.record(CircuitEvent::Error, now);
        }
        if resolution.dependency_failures > 0 {
            warn!(failures = resolution.dependency_failures, "Dependency failures recorded");
        }
        let plans = match (session.is_open(), self.policy) {
            (false, SessionPolicy::Suppress) => {
                debug!(session = %session, "Suppressing plans outside regular hours");
                vec![TradePlan::no_action(
                    &resolution.label,
                    format!("market {}", session.reason()),
                )]
            }
            _ => resolution.plans,
        };

        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        info!(
            label = %resolution.label,
            side = %resolution.side,
            mode = %request.mode,
            session = %session,
            plans = plans.len(),
            elapsed_us,
            "Headline processed"
        );

        Reaction {
            label: resolution.label,
            side: resolution.side,
            mode: request.mode,
            session,
            plans,
            elapsed_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::calendar::UsEquityCalendar;
    use crate::application::catalog::CatalogSet;
    use crate::application::circuit::CircuitConfig;
    use crate::domain::AssetClass;
    use crate::testkit;
    use chrono::TimeZone;

    fn reactor() -> Reactor {
        Reactor::new(
            Pipeline::new(testkit::config::pipeline()),
            Arc::new(CatalogHandle::new(testkit::catalog::full())),
            SharedCircuitBreaker::new(CircuitConfig::default()),
            Arc::new(UsEquityCalendar::new()),
        )
    }

    fn midday() -> DateTime<Utc> {
        // 12:00 EDT on a Wednesday
        Utc.with_ymd_and_hms(2024, 7, 10, 16, 0, 0).unwrap()
    }

    fn saturday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 13, 16, 0, 0).unwrap()
    }

    #[test]
    fn open_session_emits_plans() {
        let reaction = reactor().react("NVDA US IN TALKS FOR MAJOR ACQUISITION", midday());
        assert!(reaction.session.is_open());
        assert_eq!(reaction.mode, OperatingMode::Full);
        assert!(reaction.plans[0].line.starts_with("NVDA BUY $1500"));
    }

    #[test]
    fn annotate_policy_keeps_plans_when_closed() {
        let reaction = reactor().react("NVDA US IN TALKS FOR MAJOR ACQUISITION", saturday());
        assert_eq!(reaction.session, SessionState::Closed);
        assert!(!reaction.plans[0].is_no_action());
    }

    #[test]
    fn suppress_policy_replaces_plans_when_closed() {
        let reaction = reactor()
            .with_policy(SessionPolicy::Suppress)
            .react("NVDA US IN TALKS FOR MAJOR ACQUISITION", saturday());
        assert_eq!(reaction.plans.len(), 1);
        assert_eq!(reaction.plans[0].line, "NO ACTION (ma_rumor)");
        assert_eq!(reaction.plans[0].rationale, "market holiday/closed");
    }

    #[test]
    fn tripped_breaker_forces_etf_only() {
        let reactor = reactor();
        let now = midday();
        for _ in 0..3 {
            reactor.record(CircuitEvent::Error, now);
        }
        let reaction = reactor.react("NVDA US IN TALKS FOR MAJOR ACQUISITION", now);
        assert_eq!(reaction.mode, OperatingMode::EtfOnly);
        assert!(reaction
            .plans
            .iter()
            .all(|p| p.asset_class == Some(AssetClass::Etf)));
    }

    #[test]
    fn failing_price_source_trips_the_breaker() {
        let catalogs = testkit::catalog::full().with_prices(testkit::catalog::FailingPrices);
        let reactor = reactor().with_whitelist(Whitelist::parse("NVDA,SOXX"));
        reactor.catalogs().swap(catalogs);
        let now = midday();

        for _ in 0..3 {
            let reaction = reactor.react("NVDA IN TALKS", now);
            assert_eq!(reaction.mode, OperatingMode::Full);
            assert_eq!(reaction.plans[0].line, "NVDA BUY $1500 IOC TTL=10m (NEWS: ma_rumor)");
        }

        let degraded = reactor.react("NVDA IN TALKS", now);
        assert_eq!(degraded.mode, OperatingMode::EtfOnly);
        assert_eq!(degraded.plans[0].line, "SOXX BUY $1500 IOC TTL=10m (NEWS: ma_rumor)");
    }

    #[test]
    fn swapped_catalog_applies_to_next_reaction() {
        let reactor = reactor();
        reactor.catalogs().swap(CatalogSet::empty());
        let reaction = reactor.react("000660 KS SUPPLY DEAL", midday());
        assert!(reaction.plans.iter().all(|p| !p.line.starts_with("SOXX")));
    }
}
