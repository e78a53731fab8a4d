use serde::Deserialize;
use serde_json::Value;

use crate::coerce;
use crate::model::dashboard::{RawMaterials, WeekEntry};

/// Loosely-typed upsert payload for one month.
///
/// Numeric fields stay raw `Value`s until the service coerces them, so
/// "field absent" and "field present but junk" remain distinguishable.
/// The two cases resolve differently for `actualProduction`: absent means
/// derive from the weekly sum, present-but-junk means the caller's value
/// wins and coerces to 0.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDashboardInput {
    pub month: String,
    #[serde(default)]
    pub target_production: Option<Value>,
    #[serde(default)]
    pub weeks: Option<Vec<WeekEntryInput>>,
    #[serde(default)]
    pub raw_materials_bought: Option<RawMaterialsInput>,
    #[serde(default)]
    pub actual_production: Option<Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeekEntryInput {
    #[serde(default)]
    pub week_label: String,
    #[serde(default)]
    pub production: Option<Value>,
    #[serde(default)]
    pub sugar_used: Option<Value>,
    #[serde(default)]
    pub mango_pulp_used: Option<Value>,
}

impl WeekEntryInput {
    pub fn into_entry(self) -> WeekEntry {
        WeekEntry {
            week_label: self.week_label,
            production: coerce::to_number(self.production.as_ref()),
            sugar_used: coerce::to_number(self.sugar_used.as_ref()),
            mango_pulp_used: coerce::to_number(self.mango_pulp_used.as_ref()),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialsInput {
    #[serde(default)]
    pub sugar: Option<Value>,
    #[serde(default)]
    pub mango_pulp: Option<Value>,
}

impl RawMaterialsInput {
    pub fn into_materials(self) -> RawMaterials {
        RawMaterials {
            sugar: coerce::to_number(self.sugar.as_ref()),
            mango_pulp: coerce::to_number(self.mango_pulp.as_ref()),
        }
    }
}
