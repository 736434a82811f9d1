use std::env::args_os;
use std::io::{self, Write};
use std::process::ExitCode;

use huffman_tree::{analyse_files, CLIParser, Error};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut stdout = io::stdout().lock();
    let mut exit_code = ExitCode::SUCCESS;
    for report in analyse_files(&arguments) {
        match report {
            Ok(text) => {
                if let Err(e) = stdout.write_all(text.as_bytes()) {
                    eprintln!("Analysis failed because of: {}", Error::FailedToWriteReport(e));
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                eprintln!("Analysis failed because of: {}", e);
                exit_code = ExitCode::FAILURE;
            }
        }
    }
    exit_code
}
