pub mod aggregate;
pub mod independent_set;
pub mod problem;
pub mod solution;
pub mod trip_path;

pub use solution::{minimum_total_price, plan_trips, Solution};
