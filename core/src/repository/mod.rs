pub mod file;
pub mod traits;

// Re-export
pub use file::FileDashboardRepository;
pub use traits::DashboardRepository;
