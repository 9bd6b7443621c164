pub mod comparison;
pub mod link;
pub mod repository;
pub mod scoring;

pub use comparison::{BiasTrend, CategoryDelta, ComparisonError};
pub use repository::DatasetRepository;
pub use scoring::ColorBucket;
