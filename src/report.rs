use std::fmt;

use clap::{builder::PossibleValue, ValueEnum};

use crate::{
    error::Error,
    huffman::{describe_symbol, HuffmanTree, SymbolEncoding, SymbolFrequency},
    Result,
};

const BITS_PER_BYTE: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportView {
    #[default]
    Table,
    Tree,
    Both,
}

impl ReportView {
    pub fn shows_table(&self) -> bool {
        matches!(self, Self::Table | Self::Both)
    }

    pub fn shows_tree(&self) -> bool {
        matches!(self, Self::Tree | Self::Both)
    }
}

impl ValueEnum for ReportView {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Table, Self::Tree, Self::Both]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Table => Some(PossibleValue::new("table")),
            Self::Tree => Some(PossibleValue::new("tree")),
            Self::Both => Some(PossibleValue::new("both")),
        }
    }
}

/// Codes of every present symbol and the size of the encoded text.
pub struct EncodingSummary {
    encodings: Vec<SymbolEncoding>,
    code_column_width: usize,
}

impl EncodingSummary {
    pub fn new(tree: &HuffmanTree, symbol_frequencies: &[SymbolFrequency]) -> Result<Self> {
        let encodings = symbol_frequencies
            .iter()
            .filter(|sf| sf.frequency > 0)
            .map(|sf| {
                tree.encode(sf.symbol)
                    .ok_or(Error::SymbolNotPresentInTree(sf.symbol))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            encodings,
            code_column_width: tree.height() + 1,
        })
    }

    pub fn encodings(&self) -> &[SymbolEncoding] {
        &self.encodings
    }

    pub fn total_bits(&self) -> usize {
        self.encodings.iter().map(SymbolEncoding::encoded_bits).sum()
    }

    /// Encoded size rounded up to whole bytes.
    pub fn total_bytes(&self) -> usize {
        self.total_bits().div_ceil(BITS_PER_BYTE)
    }
}

impl fmt::Display for EncodingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for encoding in &self.encodings {
            writeln!(
                f,
                "{} :{:>width$} ({:3} * {:4})",
                describe_symbol(encoding.symbol()),
                encoding.bits(),
                encoding.length(),
                encoding.frequency(),
                width = self.code_column_width
            )?;
        }
        writeln!(f, "{} Bytes", self.total_bytes())
    }
}

pub fn render_report(
    source: &str,
    tree: &HuffmanTree,
    summary: &EncodingSummary,
    view: ReportView,
) -> String {
    let mut report = format!("{}\n", source);
    if view.shows_tree() {
        report.push_str(&tree.to_string());
        report.push('\n');
    }
    if view.shows_table() {
        report.push_str(&summary.to_string());
        report.push('\n');
    }
    report
}
