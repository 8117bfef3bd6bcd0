pub mod create_health_task;
pub mod delete_health_task;
pub mod get_health_tasks;
pub mod update_health_task;

pub use create_health_task::create_health_task_handler;
pub use delete_health_task::delete_health_task_handler;
pub use get_health_tasks::get_health_tasks_handler;
pub use update_health_task::update_health_task_handler;
