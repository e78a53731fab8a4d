use crate::model::dashboard::DashboardRecord;
use anyhow::Result;

/// Keyed document store for monthly dashboard records.
///
/// `save` is insert-or-full-replace keyed by `month` in a single call, so
/// callers never have to sequence a lookup with a write.
pub trait DashboardRepository {
    fn find_all(&self) -> Result<Vec<DashboardRecord>>;
    fn find_by_month(&self, month: &str) -> Result<Option<DashboardRecord>>;
    fn save(&self, record: DashboardRecord) -> Result<DashboardRecord>;
}
