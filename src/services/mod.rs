pub mod analysis;

pub use analysis::{AnalysisOptions, AnalysisService};
