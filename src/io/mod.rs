pub mod csv;
pub mod json_reader;
