pub mod create_appointment;
pub mod delete_appointment;
pub mod get_appointments;
pub mod get_upcoming_appointments;
pub mod update_appointment;

pub use create_appointment::create_appointment_handler;
pub use delete_appointment::delete_appointment_handler;
pub use get_appointments::get_appointments_handler;
pub use get_upcoming_appointments::get_upcoming_appointments_handler;
pub use update_appointment::update_appointment_handler;
