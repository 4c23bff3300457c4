use clap::Parser;
use mactrie::{BuildReport, LinearMatcher, PrefixTrie, VendorMapping};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mactrie-bench")]
#[command(about = "Time MAC vendor lookups through the prefix trie against a linear scan")]
struct Cli {
    /// JSON array of {"mac_prefix", "vendor_name"} records
    #[arg(long, default_value = "data/vendors.json")]
    mappings: PathBuf,

    /// JSON array of MAC address strings to resolve
    #[arg(long, default_value = "data/addresses.json")]
    addresses: PathBuf,

    /// Number of passes over the addresses per matcher
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Print the resolved vendor of every address
    #[arg(long)]
    print: bool,
}

fn read_json<T>(path: &Path) -> Result<T, Box<dyn Error>> where for<'de> T: Deserialize<'de> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

macro_rules! time {
    ($name:literal, $size:expr, $code:block) => {{
        let start = Instant::now();
        $code;
        let duration = start.elapsed().as_secs_f64();
        println!("{:>15}: {:>10.5} seconds {:>10} size", $name, duration, $size);
    }};
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mappings: Vec<VendorMapping> = read_json(&cli.mappings)?;
    let addresses: Vec<String> = read_json(&cli.addresses)?;
    info!(mappings = mappings.len(), addresses = addresses.len(), "loaded inputs");

    let linear = LinearMatcher::new(mappings.clone());
    let BuildReport { trie, rejected } = PrefixTrie::from_mappings(mappings);
    if !rejected.is_empty() {
        warn!(count = rejected.len(), "malformed mappings were left out of the trie");
    }

    let mut linear_found: Vec<Option<&str>> = Vec::new();
    time!("linear", linear.len(), {
        for _ in 0..cli.rounds {
            linear_found = addresses.iter().map(|a| linear.find(a)).collect();
        };
    });

    let mut trie_found: Vec<Option<&str>> = Vec::new();
    time!("trie", trie.node_count(), {
        for _ in 0..cli.rounds {
            trie_found = trie.search_many(&addresses);
        };
    });

    if cli.print {
        for (address, vendor) in addresses.iter().zip(&trie_found) {
            println!("{} {}", address, vendor.unwrap_or("-"));
        };
    }

    let mismatched: Vec<(&String, Option<&str>, Option<&str>)> = addresses
        .iter()
        .zip(linear_found.iter().zip(&trie_found))
        .filter(|(_, (l, t))| l != t)
        .map(|(a, (l, t))| (a, *l, *t))
        .collect();

    if mismatched.is_empty() {
        println!("results match for {} addresses", addresses.len());
        Ok(())
    } else {
        eprintln!("MISMATCHED results ({}):", mismatched.len());
        for (address, expected, actual) in &mismatched {
            eprintln!("  {} -> linear {:?}, trie {:?}", address, expected, actual);
        };
        Err(format!("{} of {} lookups disagree", mismatched.len(), addresses.len()).into())
    }
}
