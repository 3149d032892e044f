use std::process;
use std::time::Duration;

use anyhow::anyhow;
use clap::{ArgAction, Parser, ValueEnum};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use fcount::common::io::read_input;
use fcount::common::{io_error_msg, timed};
use fcount::count::{self, DEFAULT_PARTITIONS, parse_target_byte};

#[derive(Parser)]
#[command(
    name = "fcount",
    version,
    about = "Count occurrences of one byte in FILE, sequentially and in parallel partitions"
)]
struct Cli {
    /// Byte to count: a character, an escape (\n \t \r \0 \\) or hex (0x2c)
    #[arg(
        short = 'b',
        long = "byte",
        value_name = "SPEC",
        default_value = ",",
        value_parser = parse_target_byte
    )]
    target: u8,

    /// Number of contiguous partitions, one worker per non-empty partition
    #[arg(
        short = 'j',
        long = "partitions",
        value_name = "N",
        default_value_t = DEFAULT_PARTITIONS as u64,
        value_parser = clap::value_parser!(u64).range(1..=4096)
    )]
    partitions: u64,

    /// Scan strategy to compare against the sequential count (repeatable)
    #[arg(
        short = 's',
        long = "strategy",
        value_name = "NAME",
        value_enum,
        default_value = "partitioned"
    )]
    strategies: Vec<Strategy>,

    /// Run every strategy
    #[arg(long = "all", conflicts_with = "strategies")]
    all: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Input file (`-` for standard input)
    #[arg(value_name = "FILE")]
    file: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// memchr SIMD sequential scan
    Simd,
    /// Scoped threads sharing an atomic accumulator
    Partitioned,
    /// Scoped threads running the SIMD counter, atomic accumulator
    SimdPartitioned,
    /// Scoped threads writing private slots, summed after join
    Slots,
    /// Partitions on the rayon pool with a parallel sum
    Rayon,
}

impl Strategy {
    const ALL: [Strategy; 5] = [
        Strategy::Simd,
        Strategy::Partitioned,
        Strategy::SimdPartitioned,
        Strategy::Slots,
        Strategy::Rayon,
    ];

    /// Report label, the same name `-s` accepts.
    fn label(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_else(|| format!("{:?}", self))
    }

    fn count(self, data: &[u8], target: u8, partitions: usize) -> u64 {
        match self {
            Strategy::Simd => count::count_byte_simd(data, target),
            Strategy::Partitioned => count::count_byte_partitioned(data, target, partitions),
            Strategy::SimdPartitioned => {
                count::count_byte_partitioned_simd(data, target, partitions)
            }
            Strategy::Slots => count::count_byte_partitioned_slots(data, target, partitions),
            Strategy::Rayon => count::count_byte_rayon(data, target, partitions),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Printable form of the target byte for report lines.
fn describe_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        format!("'{}'", b as char)
    } else {
        format!("0x{:02x}", b)
    }
}

fn report(label: &str, count: u64, elapsed: Duration, target: &str) {
    let took = format!("{:?}", elapsed);
    println!("[x] {:<16} took {:>12}  count: {} {}", label, took, count, target);
}

/// Load the input, run the sequential reference scan and every selected
/// strategy. Returns `Ok(false)` if any strategy disagreed with the reference.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let (loaded, load_time) = timed(|| read_input(&cli.file));
    let data = loaded.map_err(|e| {
        let name = if cli.file == "-" {
            "standard input"
        } else {
            cli.file.as_str()
        };
        anyhow!("{}: {}", name, io_error_msg(&e))
    })?;
    println!(
        "[+] file loaded ( took {:?}, {} bytes )",
        load_time,
        data.len()
    );

    let target = cli.target;
    let partitions = cli.partitions as usize;
    let shown = describe_byte(target);

    let strategies: Vec<Strategy> = if cli.all {
        Strategy::ALL.to_vec()
    } else {
        let mut picked = Vec::with_capacity(cli.strategies.len());
        for &s in &cli.strategies {
            if !picked.contains(&s) {
                picked.push(s);
            }
        }
        picked
    };
    log::debug!(
        "target {} over {} bytes, {} partitions, strategies {:?}",
        shown,
        data.len(),
        partitions,
        strategies
    );

    let (reference, elapsed) = timed(|| count::count_byte(&data, target));
    report("sequential", reference, elapsed, &shown);

    let mut agreed = true;
    for strategy in strategies {
        let (n, elapsed) = timed(|| strategy.count(&data, target, partitions));
        let label = strategy.label();
        report(&label, n, elapsed, &shown);
        if n != reference {
            log::error!(
                "{} counted {} but sequential counted {}",
                label,
                n,
                reference
            );
            agreed = false;
        }
    }
    Ok(agreed)
}

fn main() {
    fcount::common::reset_sigpipe();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("fcount: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_cli_names() {
        for strategy in Strategy::ALL {
            let label = strategy.label();
            assert_eq!(Strategy::from_str(&label, false), Ok(strategy), "{label}");
        }
        assert_eq!(Strategy::SimdPartitioned.label(), "simd-partitioned");
    }

    #[test]
    fn test_all_strategies_agree_with_sequential() {
        let data = b",a,".repeat(37);
        for strategy in Strategy::ALL {
            for partitions in [1, 2, 16, 200] {
                assert_eq!(strategy.count(&data, b',', partitions), 74, "{strategy:?}");
            }
        }
    }
}
