//! Ports - Interface definitions for the incremental parser

use std::io;

use thiserror::Error;

use crate::errors::SceneCacheError;

/// Forward-only line cursor over one input.
pub trait LineReader: Send {
    /// Next line without its terminator; `None` once the input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// 1-based number of the line last returned (0 before the first read)
    fn line_number(&self) -> usize;
}

/// Signal raised by an interruption check to stop the current build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("build interrupted")]
pub struct Cancelled;

impl From<Cancelled> for SceneCacheError {
    fn from(_: Cancelled) -> Self {
        SceneCacheError::Cancelled
    }
}

/// Callback polled between batches of parsed objects.
///
/// Returning `Err(Cancelled)` stops the build; parser state stays valid and
/// the next build of the same unchanged input resumes from that point.
pub trait InterruptCheck {
    fn check(&mut self) -> Result<(), Cancelled>;
}

impl<F> InterruptCheck for F
where
    F: FnMut() -> Result<(), Cancelled>,
{
    fn check(&mut self) -> Result<(), Cancelled> {
        self()
    }
}

/// Interruption check that never cancels
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl InterruptCheck for NoInterrupt {
    fn check(&mut self) -> Result<(), Cancelled> {
        Ok(())
    }
}
