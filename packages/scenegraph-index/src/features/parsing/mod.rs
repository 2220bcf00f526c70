//! Incremental scene parser
//!
//! Streams a scene file line by line, recognises object records and drives
//! graph store mutations. The read cursor and the pending line survive
//! cancellation, so an interrupted build continues where it stopped.
//!
//! ## Architecture
//! - Domain: line classification and field extraction (`markers`)
//! - Ports: `LineReader` (input cursor), `InterruptCheck` (cooperative cancellation)
//! - Infrastructure: `BufLineReader`, `IncrementalParser`

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::markers::{LineKind, MalformedField};
pub use infrastructure::{BufLineReader, IncrementalParser, ParserPhase};
pub use ports::{Cancelled, InterruptCheck, LineReader, NoInterrupt};
