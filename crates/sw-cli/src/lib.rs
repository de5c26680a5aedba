pub mod cli;
pub mod error;
pub mod run;

pub use cli::{Cli, ReportType};
pub use error::CliError;
pub use run::run;
