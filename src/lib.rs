use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::mpsc,
};

use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use error::Error;
use frequency::{FrequencyTable, SymbolFilter};
use huffman::{HuffmanTree, MergeStrategyKind};
use report::{render_report, EncodingSummary, ReportView};

mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    view: ReportView,
    strategy: MergeStrategyKind,
    symbol_filter: SymbolFilter,
    number_of_threads: usize,
}

/// Per-file settings handed to every analysis job.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisOptions {
    pub view: ReportView,
    pub strategy: MergeStrategyKind,
    pub symbol_filter: SymbolFilter,
}

impl From<&Arguments> for AnalysisOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            view: value.view,
            strategy: value.strategy,
            symbol_filter: value.symbol_filter,
        }
    }
}

fn path_to_string(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))
}

fn count_symbols(file_path: &Path, filter: SymbolFilter) -> Result<FrequencyTable> {
    let input_file = open_input_file(file_path)?;
    FrequencyTable::from_reader(BufReader::new(input_file), filter)
        .map_err(|e| Error::FailedToReadInputFile(path_to_string(file_path), e))
}

/// Counts the symbols of one file, builds its tree and renders the report.
pub fn analyse_file(file_path: &Path, options: &AnalysisOptions) -> Result<String> {
    let source = path_to_string(file_path);
    let table = count_symbols(file_path, options.symbol_filter)?;
    log::info!(
        "{}: counted {} characters, {} distinct symbols",
        source,
        table.total(),
        table.distinct_symbols()
    );
    let symbol_frequencies = table.symbol_frequencies();
    let tree = HuffmanTree::with_strategy(&symbol_frequencies, &options.strategy)?;
    logger::log_tree_built(&source, &tree, options.strategy);
    let summary = EncodingSummary::new(&tree, &symbol_frequencies)?;
    let report = render_report(&source, &tree, &summary, options.view);
    let released = tree.release();
    log::debug!("{}: released {} nodes", source, released);
    Ok(report)
}

/// Analyses every input file as an independent job on a thread pool.
/// Reports come back in input order.
pub fn analyse_files(arguments: &Arguments) -> Vec<Result<String>> {
    let options = AnalysisOptions::from(arguments);
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();

    for (index, file_path) in arguments.input_files.iter().cloned().enumerate() {
        let sender = sender.clone();
        threadpool.execute(move || {
            let report = analyse_file(&file_path, &options);
            if let Err(error) = &report {
                log::warn!("{}: {}", file_path.display(), error);
            }
            // the receiver outlives every job
            let _ = sender.send((index, report));
        });
    }
    drop(sender);

    let mut reports: Vec<Option<Result<String>>> =
        arguments.input_files.iter().map(|_| None).collect();
    for (index, report) in receiver {
        reports[index] = Some(report);
    }

    reports
        .into_iter()
        .zip(&arguments.input_files)
        .map(|(report, file_path)| {
            report.unwrap_or_else(|| Err(Error::AnalysisJobLost(path_to_string(file_path))))
        })
        .collect()
}
