pub mod health_task_repository;

pub use health_task_repository::{
    CreateHealthTaskData, HealthTaskRepository, HealthTaskRepositoryError, HealthTaskResult,
    UpdateHealthTaskData,
};
