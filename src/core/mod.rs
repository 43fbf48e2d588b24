pub mod runner;
pub mod wait;

pub use crate::domain::model::WaitReport;
pub use crate::domain::ports::{ActionHost, Waiter};
pub use crate::utils::error::Result;
