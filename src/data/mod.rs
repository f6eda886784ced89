//! Data module - CSV loading, cleaning and the typed movie table

mod cleaner;
mod deriver;
mod loader;
mod profile;
pub mod schema;
mod table;

pub use cleaner::{CleanerError, CleaningReport, CleaningStep, DataCleaner};
pub use deriver::Deriver;
pub use loader::{DataLoader, LoaderError};
pub use profile::{ColumnProfile, DataProfile};
pub use table::{parse_release_date, MovieRecord, MovieTable};
