pub mod coerce;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use input::{expand_key, parse_args, ParsedInput};
pub use model::dashboard::{DashboardRecord, RawMaterials, WeekEntry};
pub use model::recommendation::RecommendationReport;
pub use repository::{DashboardRepository, FileDashboardRepository};
pub use service::dashboard_service::DashboardService;
pub use service::dto::{RawMaterialsInput, UpsertDashboardInput, WeekEntryInput};
pub use usecase::recommend::{recommend, recommend_record, RecommendationUseCase};
