use std::collections::TryReserveError;
use std::fmt::Display;

use crate::huffman::Symbol;

#[derive(Debug)]
pub enum Error {
    TooFewSymbols(usize),
    UnableToAllocateCandidates(usize, TryReserveError),
    SymbolNotPresentInTree(Symbol),
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteReport(std::io::Error),
    AnalysisJobLost(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewSymbols(count) => {
                write!(
                    f,
                    "Too few symbols to build a tree. Expected at least 2 distinct symbols, but got {}.",
                    count
                )
            }
            Self::UnableToAllocateCandidates(count, error) => {
                write!(
                    f,
                    "Unable to allocate storage for {} tree candidates: {}",
                    count, error
                )
            }
            Self::SymbolNotPresentInTree(symbol) => {
                write!(f, "Symbol '{}' not present in huffman tree", symbol)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteReport(error) => write!(f, "Failed to write report: {}", error),
            Self::AnalysisJobLost(path) => {
                write!(f, "Analysis of '{}' ended without a report", path)
            }
        }
    }
}

impl std::error::Error for Error {}
