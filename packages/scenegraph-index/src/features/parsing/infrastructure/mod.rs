// Parsing Infrastructure

pub mod incremental_parser;
pub mod line_reader;

pub use incremental_parser::{IncrementalParser, ParserPhase};
pub use line_reader::BufLineReader;
