//! Coupon schedule generation.

mod schedule;

pub use schedule::{Schedule, ScheduleConfig};
