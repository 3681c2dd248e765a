pub mod record;

pub use record::{EditorialRecord, ProblemRecord};
