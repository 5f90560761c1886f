//! Argument handling for the `jco` program

use anyhow::{bail, Context};
use clap::{arg, command, value_parser, ArgMatches, Command};
use jco::{ByteVec, PadLimit, Table, TableConfig};
use log::{warn, SetLoggerError};

/// Largest accepted `--bits`, which is the default padding cap in bits
pub const MAX_BITS: u64 = 8 * PadLimit::DEFAULT.get() as u64;

/// Log filter used when the filter variable is unset, so that warnings about
/// the arguments reach the user
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global logger, filtered by `RUST_LOG` and falling back to
/// [DEFAULT_LOG_FILTER]
pub fn init_logging() -> Result<(), SetLoggerError> {
    init_logging_from(env_logger::DEFAULT_FILTER_ENV)
}

/// Same as [init_logging] but reads the filter from `filter_var`
pub fn init_logging_from(filter_var: &str) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(filter_var, DEFAULT_LOG_FILTER),
    )
    .try_init()
}

/// The warning for a `--bits` that is not a whole number of bytes
pub fn rounding_warning(bits: u64) -> Option<String> {
    if bits % 8 == 0 {
        return None
    }
    Some(format!(
        "-b {bits} is not a multiple of 8 and will be rounded up to {} bits",
        (bits + 7) / 8 * 8
    ))
}

pub fn command() -> Command {
    command!()
        .name("jco")
        .about("Shows a number, or two numbers and their combinations, in decimal, hexadecimal, and binary")
        .arg(
            arg!([NUMBERS] ... "One or two unsigned integer literals (0x.., 0o.., 0b.., or decimal)")
                .num_args(1..)
                .allow_negative_numbers(true),
        )
        .arg(
            arg!(-b --bits <BITS> "Number of bits to show, rounded up to whole bytes")
                .value_parser(value_parser!(u64).range(1..=MAX_BITS))
                .default_value("32"),
        )
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: TableConfig,
    /// The numbers together with how they were written
    pub numbers: Vec<(String, ByteVec)>,
}

impl Invocation {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let bits = matches.get_one::<u64>("bits").copied().unwrap_or(32);
        if let Some(msg) = rounding_warning(bits) {
            warn!("{msg}");
        }
        let written: Vec<&String> = matches
            .get_many::<String>("NUMBERS")
            .map(|v| v.collect())
            .unwrap_or_default();
        Ok(Self {
            config: TableConfig::new(bits),
            numbers: parse_numbers(&written)?,
        })
    }

    /// Builds the report, or returns `None` if there is nothing to show
    pub fn table(&self) -> Option<Table> {
        let mut table = Table::new(self.config);
        match self.numbers.as_slice() {
            [(name, a)] => table.one(a, name),
            [(name_a, a), (name_b, b)] => table.two(a, b, name_a, name_b),
            _ => return None,
        }
        Some(table)
    }
}

/// Parses at most two literals with [ByteVec::parse_literal]
pub fn parse_numbers<S: AsRef<str>>(written: &[S]) -> anyhow::Result<Vec<(String, ByteVec)>> {
    if written.len() > 2 {
        bail!("expected one or two numbers, got {}", written.len())
    }
    let mut numbers = vec![];
    for s in written {
        let s = s.as_ref();
        let x = ByteVec::parse_literal(s).with_context(|| format!("invalid number `{s}`"))?;
        numbers.push((s.to_owned(), x));
    }
    Ok(numbers)
}
