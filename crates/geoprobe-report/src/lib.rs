pub mod csv;
pub mod report;

pub use csv::{FIELDS_HEADER, RAW_JSON_HEADER};
pub use report::{generate_report, ReportFormat};
