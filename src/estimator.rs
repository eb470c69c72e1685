//! View estimation for a paid ad and the share cascade it triggers.
//!
//! Every stage of the funnel is a pure function that multiplies the previous
//! stage by a fixed ratio and truncates toward negative infinity:
//!
//! ```text
//! investment --x30--> views --x0.12--> clicks --x0.15--> shares --x40--> views
//!                       ^                                                  |
//!                       +-------------- next cascade round ----------------+
//! ```
//!
//! The paid views plus the views of each cascade round add up to the
//! estimate.
//!
//! # Example
//!
//! ```rust
//! use adreach::estimator::{estimate_cascade, estimate_total_views};
//!
//! assert_eq!(estimate_total_views(10.0, None), 700);
//!
//! let report = estimate_cascade(10.0);
//! assert_eq!(report.initial_views, 300);
//! assert_eq!(report.rounds.len(), 3);
//! ```

use crate::core::{CascadeReport, CascadeRound, ViewCount};

/// Views bought per currency unit invested.
pub const VIEWS_PER_CURRENCY_UNIT: f64 = 30.0;
/// 12 clicks for every 100 views.
pub const CLICKS_PER_VIEW: f64 = 12.0 / 100.0;
/// 3 shares for every 20 clicks.
pub const SHARES_PER_CLICK: f64 = 3.0 / 20.0;
/// Views reached by a single share.
pub const VIEWS_PER_SHARE: ViewCount = 40;

/// Number of cascade rounds every estimate runs.
///
/// Round 1 is the audience of the original ad sharing it, round 2 the
/// audience of those shares sharing again, round 3 the last generation that
/// shares. The viewers reached by round 3 do not share.
pub const DEFAULT_CASCADE_ROUNDS: u32 = 3;

pub fn views_from_investment(investment: f64) -> ViewCount {
    (investment * VIEWS_PER_CURRENCY_UNIT).floor() as ViewCount
}

pub fn clicks_from_views(views: ViewCount) -> ViewCount {
    (views as f64 * CLICKS_PER_VIEW).floor() as ViewCount
}

pub fn shares_from_clicks(clicks: ViewCount) -> ViewCount {
    (clicks as f64 * SHARES_PER_CLICK).floor() as ViewCount
}

pub fn views_from_shares(shares: ViewCount) -> ViewCount {
    shares.saturating_mul(VIEWS_PER_SHARE)
}

/// Runs one cascade round: the given audience clicks, shares, and the
/// shares reach a new audience.
pub fn cascade_round(round: u32, views: ViewCount) -> CascadeRound {
    let clicks = clicks_from_views(views);
    let shares = shares_from_clicks(clicks);
    CascadeRound {
        round,
        clicks,
        shares,
        views: views_from_shares(shares),
    }
}

/// Estimates the paid views and every cascade round for `investment`.
///
/// Always runs [`DEFAULT_CASCADE_ROUNDS`] rounds. Negative investment is not
/// rejected and flows through the same arithmetic.
pub fn estimate_cascade(investment: f64) -> CascadeReport {
    let initial_views = views_from_investment(investment);
    let mut total_views = initial_views;
    let mut views = initial_views;
    let mut rounds = Vec::with_capacity(DEFAULT_CASCADE_ROUNDS as usize);

    for round in 1..=DEFAULT_CASCADE_ROUNDS {
        let step = cascade_round(round, views);
        views = step.views;
        total_views = total_views.saturating_add(views);
        tracing::trace!(
            round,
            clicks = step.clicks,
            shares = step.shares,
            views,
            total_views,
            "cascade round"
        );
        rounds.push(step);
    }

    tracing::debug!(investment, initial_views, total_views, "estimate complete");

    CascadeReport {
        investment,
        initial_views,
        rounds,
        total_views,
    }
}

/// Estimates the total views (paid plus cascade) for `investment`.
///
/// `max_cascade_rounds` is accepted for compatibility with the historical
/// calculator, which overwrote it with 3 before looping. That behavior is
/// kept: any other value is ignored and logged.
pub fn estimate_total_views(investment: f64, max_cascade_rounds: Option<u32>) -> ViewCount {
    if let Some(requested) = max_cascade_rounds.filter(|&n| n != DEFAULT_CASCADE_ROUNDS) {
        tracing::warn!(
            requested,
            used = DEFAULT_CASCADE_ROUNDS,
            "max_cascade_rounds is not honored; running the fixed number of rounds"
        );
    }

    estimate_cascade(investment).total_views
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_from_investment() {
        assert_eq!(views_from_investment(0.0), 0);
        assert_eq!(views_from_investment(10.0), 300);
        // 0.99 * 30 = 29.7
        assert_eq!(views_from_investment(0.99), 29);
    }

    #[test]
    fn test_clicks_from_views() {
        assert_eq!(clicks_from_views(100), 12);
        assert_eq!(clicks_from_views(0), 0);
        assert_eq!(clicks_from_views(300), 36);
        assert_eq!(clicks_from_views(120), 14);
    }

    #[test]
    fn test_shares_from_clicks() {
        assert_eq!(shares_from_clicks(20), 3);
        assert_eq!(shares_from_clicks(36), 5);
        assert_eq!(shares_from_clicks(6), 0);
    }

    #[test]
    fn test_views_from_shares() {
        assert_eq!(views_from_shares(1), 40);
        assert_eq!(views_from_shares(0), 0);
    }

    #[test]
    fn test_floor_not_round() {
        // 24 * 0.15 = 3.6 must truncate to 3
        assert_eq!(shares_from_clicks(24), 3);
        // 0.05 * 30 = 1.5 must truncate to 1
        assert_eq!(views_from_investment(0.05), 1);
    }

    #[test]
    fn test_estimate_ten() {
        assert_eq!(estimate_total_views(10.0, None), 700);
    }

    #[test]
    fn test_estimate_zero() {
        assert_eq!(estimate_total_views(0.0, None), 0);
    }

    #[test]
    fn test_cascade_breakdown_for_ten() {
        let report = estimate_cascade(10.0);
        assert_eq!(report.initial_views, 300);
        let views: Vec<_> = report.rounds.iter().map(|r| r.views).collect();
        assert_eq!(views, vec![200, 120, 80]);
        let clicks: Vec<_> = report.rounds.iter().map(|r| r.clicks).collect();
        assert_eq!(clicks, vec![36, 24, 14]);
        let shares: Vec<_> = report.rounds.iter().map(|r| r.shares).collect();
        assert_eq!(shares, vec![5, 3, 2]);
        assert_eq!(report.total_views, 700);
    }

    #[test]
    fn test_rounds_argument_is_ignored() {
        assert_eq!(estimate_total_views(10.0, Some(1)), 700);
        assert_eq!(estimate_total_views(10.0, Some(10)), 700);
        assert_eq!(
            estimate_total_views(10.0, Some(DEFAULT_CASCADE_ROUNDS)),
            estimate_total_views(10.0, None)
        );
    }

    #[test]
    fn test_small_investment_has_no_cascade() {
        // 30 views -> 3 clicks -> 0 shares
        let report = estimate_cascade(1.0);
        assert_eq!(report.initial_views, 30);
        assert_eq!(report.total_views, 30);
        assert!(report.rounds.iter().all(|r| r.views == 0));
    }

    #[test]
    fn test_negative_investment_is_not_rejected() {
        assert_eq!(views_from_investment(-1.0), -30);
        let total = estimate_total_views(-1.0, None);
        assert!(total <= 0);
    }

    #[test]
    fn test_rounds_are_numbered_from_one() {
        let report = estimate_cascade(100.0);
        let numbers: Vec<_> = report.rounds.iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
