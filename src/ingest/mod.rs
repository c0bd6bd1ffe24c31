mod errors;
mod layout;
mod reader;

pub use errors::IngestError;
pub use reader::read_transactions;
