// Adapters layer: concrete clinic services behind the `ClinicService` port.

pub mod csv_source;
pub mod http;
pub mod memory;

pub use csv_source::CsvClinicService;
pub use http::HttpClinicService;
pub use memory::InMemoryClinicService;
