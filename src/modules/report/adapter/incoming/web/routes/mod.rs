pub mod generate_report;

pub use generate_report::generate_report_handler;
