pub mod config;
pub mod error;
pub mod lookup;
pub mod record;
pub mod report;
pub mod telemetry;

pub use config::ReportSettings;
pub use error::*;
pub use lookup::LookupMiss;
pub use record::*;
pub use report::*;
