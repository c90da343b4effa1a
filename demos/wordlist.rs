//! Fill a Bloom filter from a word list, then measure false negatives and false
//! positives against the words that follow.
//!
//! ```text
//! cargo run --example wordlist -- --words wordlist.txt --keys 100000
//! ```
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use chainbloom::BloomFilter;
use clap::Parser;
use env_logger::Env;
use log::info;

#[derive(Parser, Debug)]
#[command(name = "wordlist", about = "Measure a Bloom filter against a word list")]
struct Args {
    /// Word list, one key per line.
    #[arg(long)]
    words: PathBuf,
    /// Number of words to insert, and number of absent words to query.
    #[arg(long, default_value_t = 100_000)]
    keys: usize,
    /// Hash draws per key.
    #[arg(long, default_value_t = 4)]
    hashes: usize,
    /// Target false positive rate.
    #[arg(long, default_value_t = 0.05)]
    rate: f64,
}

fn open(path: &Path) -> Result<Lines<BufReader<File>>, Box<dyn Error>> {
    Ok(BufReader::new(File::open(path)?).lines())
}

fn take(lines: &mut Lines<BufReader<File>>, n: usize) -> Result<Vec<String>, Box<dyn Error>> {
    let words = lines.take(n).collect::<Result<Vec<_>, _>>()?;
    if words.len() < n {
        let msg = format!("word list has {} of the {} lines needed", words.len(), n);
        return Err(msg.into());
    }
    Ok(words)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let mut bf = BloomFilter::<str>::new(args.keys, args.hashes, args.rate)?;

    let mut lines = open(&args.words)?;
    for word in take(&mut lines, args.keys)? {
        bf.insert(&word);
    }
    info!(
        "inserted {} words: {} of {} bits set",
        args.keys,
        bf.set_bit_count(),
        bf.bits()
    );
    info!("projected false positive rate: {}", bf.false_positive_rate());

    let mut lines = open(&args.words)?;
    let missing = take(&mut lines, args.keys)?
        .iter()
        .filter(|word| !bf.find(word))
        .count();
    info!("{} words are wrongly missing from the filter", missing);

    let false_positives = take(&mut lines, args.keys)?
        .iter()
        .filter(|word| bf.find(word))
        .count();
    info!("{} false positives", false_positives);
    info!(
        "measured false positive rate: {}",
        false_positives as f64 / args.keys as f64
    );

    Ok(())
}
