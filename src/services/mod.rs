pub mod advisory_service;
pub mod forms;

pub use advisory_service::*;
pub use forms::*;
