pub mod appointment;
pub mod auth;
pub mod expense;
pub mod health_task;
pub mod insights;
pub mod report;
pub mod symptom_log;
pub mod timeline;
