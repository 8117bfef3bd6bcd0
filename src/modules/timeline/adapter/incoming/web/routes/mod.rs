pub mod create_timeline_entry;
pub mod delete_timeline_entry;
pub mod get_timeline;
pub mod update_timeline_entry;

pub use create_timeline_entry::create_timeline_entry_handler;
pub use delete_timeline_entry::delete_timeline_entry_handler;
pub use get_timeline::get_timeline_handler;
pub use update_timeline_entry::update_timeline_entry_handler;
