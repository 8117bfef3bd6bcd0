pub mod health_task_service;

pub use health_task_service::HealthTaskService;
