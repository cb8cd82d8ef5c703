use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use exercises::{
    change, first_then_lower_case, meaningful_line_count_with_config, powers, BinarySearchTree,
    LineCountConfig, Quaternion, Say,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Exercises CLI - run the small exercises from the command line")]
struct Cli {
    /// Print structured output as JSON where available
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Break an amount in cents into quarters, dimes, nickels and pennies
    Change {
        /// Amount in cents
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Print powers of a base up to an inclusive limit
    Powers {
        /// Base of the powers
        #[arg(long, allow_negative_numbers = true)]
        base: i64,

        /// Largest value to print
        #[arg(long, allow_negative_numbers = true)]
        limit: i64,

        /// Stop after this many values (required with --json for bases -1, 0 and 1)
        #[arg(long)]
        take: Option<usize>,
    },
    /// Quaternion arithmetic on "a,b,c,d" coefficient lists
    Quaternion {
        /// Left operand
        #[arg(value_parser = parse_quaternion, allow_hyphen_values = true)]
        left: Quaternion,

        /// Operation to apply
        #[arg(long, value_enum, default_value_t = QuaternionOp::Show)]
        op: QuaternionOp,

        /// Right operand for add and mul
        #[arg(long, value_parser = parse_quaternion, allow_hyphen_values = true)]
        right: Option<Quaternion>,
    },
    /// Count lines that are not blank and not comments
    Lines {
        /// File to read
        path: PathBuf,

        /// Prefix that marks a comment line
        #[arg(long, default_value = exercises::config::DEFAULT_COMMENT_PREFIX)]
        comment_prefix: String,

        /// Read through a memory map instead of a buffered read
        #[arg(long)]
        mmap: bool,
    },
    /// Join words into a phrase
    Say {
        /// Words in order
        words: Vec<String>,
    },
    /// Lowercase the first word containing a substring
    First {
        /// Substring to look for
        #[arg(long)]
        containing: String,

        /// Candidate words
        words: Vec<String>,
    },
    /// Build a binary search tree from words and print it
    Tree {
        /// Words to insert, in order
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum QuaternionOp {
    Show,
    Add,
    Mul,
    Conj,
}

fn parse_quaternion(s: &str) -> Result<Quaternion, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<f64>, String>>()?;
    let coefficients: [f64; 4] = parts
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected 4 coefficients, got {}", v.len()))?;
    Quaternion::try_new(coefficients[0], coefficients[1], coefficients[2], coefficients[3])
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exercises=info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Change { amount } => handle_change(amount, cli.json)?,
        Commands::Powers { base, limit, take } => {
            handle_powers(&mut std::io::stdout().lock(), base, limit, take, cli.json)?
        }
        Commands::Quaternion { left, op, right } => handle_quaternion(left, op, right, cli.json)?,
        Commands::Lines {
            path,
            comment_prefix,
            mmap,
        } => {
            let config = LineCountConfig::default().with_comment_prefix(comment_prefix);
            let count = if mmap {
                exercises::meaningful_line_count_mmap(&path, &config)?
            } else {
                meaningful_line_count_with_config(&path, &config)?
            };
            tracing::info!(path = %path.display(), count, "Counted lines");
            println!("{count}");
        }
        Commands::Say { words } => {
            let phrase = words.into_iter().collect::<Say>().phrase();
            println!("{phrase}");
        }
        Commands::First { containing, words } => {
            match first_then_lower_case(&words, |w| w.contains(containing.as_str())) {
                Some(word) => println!("{word}"),
                None => {
                    eprintln!("No word contains {containing:?}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Tree { words } => {
            let tree: BinarySearchTree = words.iter().collect();
            println!("{tree}");
            println!("size: {}", tree.size());
        }
    }

    Ok(())
}

fn handle_change(amount: i64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let coins = change(amount)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&coins.iter().collect::<BTreeMap<u32, u64>>())?);
    } else {
        for (denomination, count) in coins.iter() {
            println!("{denomination:>3}c x {count}");
        }
        println!("{} coins", coins.total());
    }
    Ok(())
}

/// Plain output is written as each power is produced, so endless sequences
/// stream until interrupted. JSON needs the whole array up front and refuses
/// an endless sequence without `--take`.
fn handle_powers<W: Write>(
    out: &mut W,
    base: i64,
    limit: i64,
    take: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let seq = powers(base, limit);
    if json {
        if take.is_none() && seq.is_unbounded() {
            return Err(format!(
                "powers of {base} up to {limit} never end, pass --take to bound the JSON output"
            )
            .into());
        }
        let values: Vec<i64> = seq.take(take.unwrap_or(usize::MAX)).collect();
        serde_json::to_writer(&mut *out, &values)?;
        writeln!(out)?;
    } else {
        for value in seq.take(take.unwrap_or(usize::MAX)) {
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

fn handle_quaternion(
    left: Quaternion,
    op: QuaternionOp,
    right: Option<Quaternion>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = match op {
        QuaternionOp::Show => left,
        QuaternionOp::Conj => left.conjugate(),
        QuaternionOp::Add | QuaternionOp::Mul => {
            let right = right.ok_or("--right is required for add and mul")?;
            if matches!(op, QuaternionOp::Add) {
                left + right
            } else {
                left * right
            }
        }
    };

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powers_output(base: i64, limit: i64, take: Option<usize>, json: bool) -> String {
        let mut out = Vec::new();
        handle_powers(&mut out, base, limit, take, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_powers_plain() {
        assert_eq!(powers_output(2, 10, None, false), "1\n2\n4\n8\n");
        assert_eq!(powers_output(1, 5, Some(3), false), "1\n1\n1\n");
        assert_eq!(powers_output(0, 0, None, false), "");
    }

    #[test]
    fn test_powers_json() {
        assert_eq!(powers_output(2, 10, None, true), "[1,2,4,8]\n");
        assert_eq!(powers_output(-1, 1, Some(4), true), "[1,-1,1,-1]\n");
        assert_eq!(powers_output(1, 0, None, true), "[]\n");
    }

    #[test]
    fn test_powers_json_rejects_endless_sequence() {
        let mut out = Vec::new();
        let err = handle_powers(&mut out, 1, 5, None, true).unwrap_err();
        assert!(err.to_string().contains("--take"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_quaternion() {
        assert_eq!(
            parse_quaternion("1, 2,0,-1").unwrap(),
            Quaternion::new(1.0, 2.0, 0.0, -1.0)
        );
        assert!(parse_quaternion("1,2,3").is_err());
        assert!(parse_quaternion("1,2,3,inf").is_err());
    }
}
