//! Analytics application handlers.

mod schedule_aggregation;

pub use schedule_aggregation::ScheduleAggregationHandler;
