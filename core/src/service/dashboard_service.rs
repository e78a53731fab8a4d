use anyhow::Result;
use tracing::debug;

use crate::coerce;
use crate::model::dashboard::{DashboardRecord, WeekEntry};
use crate::repository::DashboardRepository;
use crate::service::dto::{RawMaterialsInput, UpsertDashboardInput, WeekEntryInput};

pub struct DashboardService<R: DashboardRepository> {
    repo: R,
}

impl<R: DashboardRepository> DashboardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_all(&self) -> Result<Vec<DashboardRecord>> {
        self.repo.find_all()
    }

    pub fn find_month(&self, month: &str) -> Result<Option<DashboardRecord>> {
        self.repo.find_by_month(month)
    }

    /// Inserts or fully replaces the record for `input.month`.
    ///
    /// A caller-supplied `actualProduction` wins over the weekly sum, even
    /// when it coerces to 0; only a fully absent field falls back to the
    /// sum of the week entries.
    pub fn upsert(&self, input: UpsertDashboardInput) -> Result<DashboardRecord> {
        let target_production = coerce::to_number(input.target_production.as_ref());

        let weeks: Vec<WeekEntry> = input
            .weeks
            .unwrap_or_default()
            .into_iter()
            .map(WeekEntryInput::into_entry)
            .collect();
        let total_weekly_production: f64 = weeks.iter().map(|w| w.production).sum();

        let actual_production = match input.actual_production.as_ref() {
            Some(value) => coerce::to_number(Some(value)),
            None => total_weekly_production,
        };
        let carryover = actual_production - target_production;

        debug!(
            month = %input.month,
            target_production,
            actual_production,
            carryover,
            "upserting dashboard record"
        );

        self.repo.save(DashboardRecord {
            month: input.month,
            target_production,
            weeks,
            raw_materials_bought: input
                .raw_materials_bought
                .map(RawMaterialsInput::into_materials)
                .unwrap_or_default(),
            actual_production,
            carryover,
        })
    }
}
