pub mod calendar;
pub mod catalog;
pub mod classifier;
pub mod display;
pub mod domain;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod schedule;
pub mod trend;

pub use catalog::SystemCatalog;
pub use classifier::{classify, classify_all, ClassifiedInspection, ClassifierConfig};
pub use recommend::{recommend, Recommendation};
pub use report::{EngineInput, PortfolioOverview};
pub use risk::{assess, RiskAssessment};
pub use trend::{trend, PeriodCounts, TrendSnapshot};
