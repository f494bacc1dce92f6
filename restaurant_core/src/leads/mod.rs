//! Lead capture: raw form submissions appended to a flat file.

pub mod record;
pub mod writer;

pub use record::LeadRecord;
pub use writer::LeadWriter;
