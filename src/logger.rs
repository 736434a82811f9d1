use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

use crate::huffman::{HuffmanTree, MergeStrategyKind};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_err() {
        init_stderr_fallback();
    }
}

fn init_stderr_fallback() {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            // a logger may already be installed by the embedding program
            let _ = log4rs::init_config(config);
        }
        Err(errors) => eprintln!("Unable to configure logging: {}", errors),
    }
}

pub fn log_tree_built(source: &str, tree: &HuffmanTree, strategy: MergeStrategyKind) {
    log::info!(
        "{}: built tree with {} symbols in {} merges using {} strategy, height {}",
        source,
        tree.leaf_count(),
        tree.leaf_count() - 1,
        strategy,
        tree.height()
    );
}
