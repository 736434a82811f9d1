use huffman_tree::{analyse_files, CLIParser, Error};
use std::path::PathBuf;

const SAMPLE_TEXT_PATH: &str = "tests/sample.txt";
const TWO_SYMBOLS_PATH: &str = "tests/two_symbols.txt";
const SINGLE_SYMBOL_PATH: &str = "tests/single_symbol.txt";
const MISSING_FILE_PATH: &str = "tests/does_not_exist.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_fixture_path(relative_path: &str) -> String {
    let mut root_path = get_project_root_path();
    root_path.push(relative_path);
    root_path.to_str().unwrap().to_owned()
}

#[test]
fn test_two_symbol_table() {
    let input_path = get_fixture_path(TWO_SYMBOLS_PATH);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", input_path.as_str()]);
    let reports = analyse_files(&arguments);
    assert_eq!(reports.len(), 1);
    let report = reports[0].as_ref().expect("Analysis failed");
    let expected = format!(
        "{}\n'a' : 0 (  1 *    1)\n'b' : 1 (  1 *    2)\n1 Bytes\n\n",
        input_path
    );
    assert_eq!(report, &expected);
}

#[test]
fn test_sample_text_with_every_strategy() {
    let input_path = get_fixture_path(SAMPLE_TEXT_PATH);
    let mut sizes = Vec::new();
    for strategy in ["binary-search", "resort", "insertion-sort"] {
        let mut cli_parser = CLIParser::new();
        let arguments = cli_parser.parse(vec!["test", input_path.as_str(), "-s", strategy]);
        let mut reports = analyse_files(&arguments);
        let report = reports.remove(0).expect("Analysis failed");
        let size_line = report
            .lines()
            .find(|line| line.ends_with(" Bytes"))
            .expect("Report has no size line")
            .to_owned();
        sizes.push(size_line);
    }
    assert!(
        sizes.windows(2).all(|pair| pair[0] == pair[1]),
        "Strategies report different sizes: {:?}",
        sizes
    );
}

#[test]
fn test_letters_only_with_tree_view() {
    let input_path = get_fixture_path(SAMPLE_TEXT_PATH);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", input_path.as_str(), "-l", "--view", "both"]);
    let mut reports = analyse_files(&arguments);
    let report = reports.remove(0).expect("Analysis failed");
    assert!(report.contains('•'), "Tree view missing");
    assert!(report.contains("(s:'W',"), "Letters must be folded to upper case");
    assert!(!report.contains("' ' :"), "Spaces must not be counted");
    assert!(!report.contains("'t' :"), "Lower case letters must not be counted");
}

#[test]
fn test_reports_keep_input_order() {
    let mut cli_parser = CLIParser::new();
    let input_paths = [
        get_fixture_path(SAMPLE_TEXT_PATH),
        get_fixture_path(SINGLE_SYMBOL_PATH),
        get_fixture_path(TWO_SYMBOLS_PATH),
        get_fixture_path(MISSING_FILE_PATH),
    ];
    let mut command_line = vec!["test", "-t", "3"];
    command_line.extend(input_paths.iter().map(String::as_str));
    let arguments = cli_parser.parse(command_line);
    let reports = analyse_files(&arguments);

    assert_eq!(reports.len(), 4);
    assert!(reports[0]
        .as_ref()
        .is_ok_and(|report| report.starts_with(&input_paths[0])));
    assert!(matches!(reports[1], Err(Error::TooFewSymbols(1))));
    assert!(reports[2]
        .as_ref()
        .is_ok_and(|report| report.starts_with(&input_paths[2])));
    assert!(matches!(
        reports[3],
        Err(Error::UnableToOpenInputFileForReading(_, _))
    ));
}
