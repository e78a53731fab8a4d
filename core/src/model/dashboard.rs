use serde::{Deserialize, Serialize};

/// One week of output within a month. Labels are free-form and kept in the
/// order the caller supplied them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntry {
    #[serde(default)]
    pub week_label: String,
    #[serde(default)]
    pub production: f64,
    #[serde(default)]
    pub sugar_used: f64,
    #[serde(default)]
    pub mango_pulp_used: f64,
}

/// Raw materials purchased for the month. Pass-through bookkeeping, nothing
/// is derived from these.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterials {
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub mango_pulp: f64,
}

/// The canonical record for one calendar month. `month` is the identity:
/// the store holds at most one record per month label.
///
/// `actual_production` and `carryover` are derived on write, and
/// `carryover == actual_production - target_production` holds for every
/// persisted record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    pub month: String,
    #[serde(default)]
    pub target_production: f64,
    #[serde(default)]
    pub weeks: Vec<WeekEntry>,
    #[serde(default)]
    pub raw_materials_bought: RawMaterials,
    #[serde(default)]
    pub actual_production: f64,
    #[serde(default)]
    pub carryover: f64,
}

impl DashboardRecord {
    pub fn weekly_total(&self) -> f64 {
        self.weeks.iter().map(|w| w.production).sum()
    }
}
