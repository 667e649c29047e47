mod aggregate;
mod domain_service;
mod repository;
mod value_objects;

#[cfg(test)]
mod domain_service_test;
#[cfg(test)]
mod value_objects_test;

pub use aggregate::CheckIn;
pub use domain_service::{CheckInAggregator, SERIES_LEN};
pub use repository::CheckInRepository;
pub use value_objects::{AnxietyDataPoint, AnxietyLevel, TrendDirection, TrendSummary};
