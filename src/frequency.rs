use std::io::{self, Read};

use crate::huffman::{Symbol, SymbolFrequency};

const READ_BUFFER_SIZE: usize = 8 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolFilter {
    #[default]
    AllBytes,
    /// ASCII letters only, folded to upper case.
    LettersOnly,
}

impl SymbolFilter {
    fn apply(&self, byte: u8) -> Option<u8> {
        match self {
            Self::AllBytes => Some(byte),
            Self::LettersOnly if byte.is_ascii_alphabetic() => Some(byte.to_ascii_uppercase()),
            Self::LettersOnly => None,
        }
    }
}

pub struct FrequencyTable {
    filter: SymbolFilter,
    symbol_frequencies: [usize; 256],
}

impl FrequencyTable {
    pub fn new(filter: SymbolFilter) -> Self {
        Self {
            filter,
            symbol_frequencies: [usize::default(); 256],
        }
    }

    pub fn from_bytes(bytes: &[u8], filter: SymbolFilter) -> Self {
        let mut table = Self::new(filter);
        table.count(bytes);
        table
    }

    pub fn from_reader<R: Read>(mut reader: R, filter: SymbolFilter) -> io::Result<Self> {
        let mut table = Self::new(filter);
        let mut buffer = [0; READ_BUFFER_SIZE];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => table.count(&buffer[..read]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(table)
    }

    pub fn count(&mut self, bytes: &[u8]) {
        for symbol in bytes.iter().filter_map(|&byte| self.filter.apply(byte)) {
            self.symbol_frequencies[symbol as usize] += 1;
        }
    }

    pub fn frequency(&self, symbol: u8) -> usize {
        self.symbol_frequencies[symbol as usize]
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbol_frequencies.iter().filter(|&&f| f > 0).count()
    }

    pub fn total(&self) -> usize {
        self.symbol_frequencies.iter().sum()
    }

    /// Present symbols in ascending symbol order.
    pub fn symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        (0..=u8::MAX)
            .zip(self.symbol_frequencies.iter().copied())
            .filter(|&(_, f)| f > 0)
            .map(|(symbol, frequency)| SymbolFrequency::new(Symbol::from(symbol), frequency))
            .collect()
    }
}
