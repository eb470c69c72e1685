use serde::{Deserialize, Serialize};

/// Integer count produced by a funnel stage.
///
/// Signed so that the unvalidated negative-investment path still produces
/// a value instead of wrapping.
pub type ViewCount = i64;

/// One generation of the share cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeRound {
    /// 1-based generation number
    pub round: u32,
    pub clicks: ViewCount,
    pub shares: ViewCount,
    /// Views produced by this generation's shares
    pub views: ViewCount,
}

/// Full breakdown of an estimate, from the paid views through every
/// cascade round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub investment: f64,
    pub initial_views: ViewCount,
    pub rounds: Vec<CascadeRound>,
    pub total_views: ViewCount,
}

impl CascadeReport {
    /// Views generated by sharing alone, excluding the paid views.
    pub fn organic_views(&self) -> ViewCount {
        self.rounds.iter().map(|r| r.views).sum()
    }
}
