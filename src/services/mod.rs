pub mod analytics;
pub mod parking;

pub use analytics::{AnalyticsService, SyntheticDataSource};
pub use parking::ParkingService;
