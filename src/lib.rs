pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod prompt;
pub mod session;
pub mod visualization;

pub use analysis::Analyzer;
pub use config::ExplorerConfig;
pub use error::BikeshareError;
pub use models::{Column, DayFilter, FilterSelection, MonthFilter, Trip, TripDataset};
pub use session::Session;
