pub mod analysis_writer;
pub mod csv_store;

pub use analysis_writer::JsonAnalysisWriter;
pub use csv_store::CsvGroupStore;
