use std::time::{Duration, Instant};

use huffman_tree::huffman::{HuffmanTree, MergeStrategyKind, Symbol, SymbolFrequency};

const NUMBER_OF_SYMBOLS: usize = 5000;
const MAXIMUM_WEIGHT: usize = 10_000;
const NUMBER_OF_ROUNDS: u32 = 10;

fn create_test_frequencies() -> Vec<SymbolFrequency> {
    (0..NUMBER_OF_SYMBOLS)
        .map(|index| {
            let weight = (index * 7919 + 13) % MAXIMUM_WEIGHT + 1;
            SymbolFrequency::new(index as Symbol, weight)
        })
        .collect()
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

fn time_strategy(strategy: MergeStrategyKind, frequencies: &[SymbolFrequency]) -> usize {
    println!("Starting {} strategy", strategy);
    let mut durations: Vec<Duration> = Vec::new();
    let mut weighted_path_length = 0;

    for round in 1..=NUMBER_OF_ROUNDS {
        let start = Instant::now();
        let tree = match HuffmanTree::with_strategy(frequencies, &strategy) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Building the tree failed because of: {}", e);
                return 0;
            }
        };
        let duration = start.elapsed();
        weighted_path_length = tree.weighted_path_length();
        tree.release();

        println!(
            "Finished round {} after {} microseconds",
            round,
            duration.as_micros(),
        );
        durations.push(duration);
    }

    let min_duration = durations.iter().min().copied().unwrap_or_default();
    let max_duration = durations.iter().max().copied().unwrap_or_default();
    let avg_duration = durations.iter().sum::<Duration>() / NUMBER_OF_ROUNDS;
    let std_deviation = calculate_std_deviation_in_micros(&avg_duration, &durations);

    println!(
        "{}: Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        strategy,
        min_duration.as_micros(),
        max_duration.as_micros(),
        avg_duration.as_micros(),
        std_deviation,
    );
    weighted_path_length
}

fn main() {
    println!(
        "Creating {} symbols with weights from 1 to {}",
        NUMBER_OF_SYMBOLS, MAXIMUM_WEIGHT
    );
    let frequencies = create_test_frequencies();

    let lengths: Vec<usize> = MergeStrategyKind::ALL
        .iter()
        .map(|&strategy| time_strategy(strategy, &frequencies))
        .collect();

    if lengths.windows(2).all(|pair| pair[0] == pair[1]) {
        println!("All strategies encode to {} bits", lengths[0]);
    } else {
        println!("Strategies disagree on the encoded size: {:?}", lengths);
    }
}
