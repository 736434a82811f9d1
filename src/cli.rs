use crate::frequency::SymbolFilter;
use crate::huffman::MergeStrategyKind;
use crate::report::ReportView;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_view_argument(command);
        let command = Self::register_strategy_argument(command);
        let command = Self::register_letters_only_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_view_argument(command: Command) -> Command {
        command.arg(Self::create_view_argument())
    }

    fn register_strategy_argument(command: Command) -> Command {
        command.arg(Self::create_strategy_argument())
    }

    fn register_letters_only_argument(command: Command) -> Command {
        command.arg(Self::create_letters_only_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to the text files to analyse")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .required(true)
    }

    fn create_view_argument() -> Arg {
        arg!(view: -v --view <VIEW> "What to print for each file")
            .default_value("table")
            .value_parser(value_parser!(ReportView))
    }

    fn create_strategy_argument() -> Arg {
        arg!(strategy: -s --strategy <STRATEGY> "How merged nodes are put back in order")
            .default_value("binary-search")
            .value_parser(value_parser!(MergeStrategyKind))
    }

    fn create_letters_only_argument() -> Arg {
        arg!(letters_only: -l --letters_only "Count only ASCII letters, folded to upper case")
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            view: Self::extract_view_argument(matches),
            strategy: Self::extract_strategy_argument(matches),
            symbol_filter: Self::extract_letters_only_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_view_argument(matches: &ArgMatches) -> ReportView {
        matches
            .get_one::<ReportView>("view")
            .expect("View must be provided, but was unset.")
            .to_owned()
    }

    fn extract_strategy_argument(matches: &ArgMatches) -> MergeStrategyKind {
        matches
            .get_one::<MergeStrategyKind>("strategy")
            .expect("Merge strategy must be provided, but was unset.")
            .to_owned()
    }

    fn extract_letters_only_argument(matches: &ArgMatches) -> SymbolFilter {
        if matches.get_flag("letters_only") {
            SymbolFilter::LettersOnly
        } else {
            SymbolFilter::AllBytes
        }
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
