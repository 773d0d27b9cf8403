//! Embassy tasks for the monitoring pipeline.

pub mod alert;
pub mod boot;
pub mod display;
pub mod sampling;
