//! Command-line arguments and the validated search configuration

use std::io::IsTerminal;

use clap::Parser;
use curvegen_algorithms::arith::{field_int_from_be_bytes, FieldInt};
use curvegen_algorithms::curve_gen::{CurveGenerator, Seed};
use curvegen_params::search::DEFAULT_SEARCH_MARGIN;

use crate::error::{Result, SearchError};

/// Search a seed neighbourhood for usable curve coefficients
#[derive(Parser, Debug, Clone)]
#[command(name = "seedsearch")]
#[command(about = "Evaluate the verifiable curve generation procedure around a seed")]
#[command(version)]
pub struct Args {
    /// How wide to search on each side of the start seed
    #[arg(long, default_value_t = DEFAULT_SEARCH_MARGIN)]
    pub margin: u32,

    /// (hex) prime modulus p
    #[arg(short = 'p', value_name = "HEX")]
    pub p: String,

    /// (hex) chosen value for a (default: p-3)
    #[arg(short = 'a', value_name = "HEX")]
    pub a: Option<String>,

    /// (hex) seed to search around for valid seeds
    #[arg(long = "start_seed", value_name = "HEX")]
    pub start_seed: String,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Worker threads (0 uses the rayon default)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Validated search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Prime modulus
    pub p: FieldInt,
    /// Coefficient a; `None` means p - 3
    pub a: Option<FieldInt>,
    /// Centre of the searched range
    pub start_seed: Seed,
    /// Half-width of the searched range
    pub margin: u32,
    /// Emit ANSI colours
    pub color: bool,
    /// Worker threads, 0 for the rayon default
    pub threads: usize,
}

impl SearchConfig {
    /// Plain configuration with default output settings
    pub fn new(p: FieldInt, a: Option<FieldInt>, start_seed: Seed, margin: u32) -> Self {
        Self {
            p,
            a,
            start_seed,
            margin,
            color: false,
            threads: 0,
        }
    }

    /// Build the generator shared by all candidates
    pub fn generator(&self) -> Result<CurveGenerator> {
        let generator = match &self.a {
            Some(a) => CurveGenerator::new(&self.p, a)?,
            None => CurveGenerator::with_default_a(&self.p)?,
        };
        Ok(generator)
    }

    /// Offsets evaluated by the search, in report order
    pub fn offsets(&self) -> std::ops::RangeInclusive<i64> {
        let margin = i64::from(self.margin);
        -margin..=margin
    }
}

fn decode_hex(flag: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| SearchError::Hex { flag, source })
}

fn decode_int(flag: &'static str, value: &str) -> Result<FieldInt> {
    let bytes = decode_hex(flag, value)?;
    Ok(field_int_from_be_bytes(&bytes)?)
}

impl TryFrom<Args> for SearchConfig {
    type Error = SearchError;

    fn try_from(args: Args) -> Result<Self> {
        let p = decode_int("-p", &args.p)?;
        let a = args.a.as_deref().map(|a| decode_int("-a", a)).transpose()?;
        let start_seed = Seed::new(decode_hex("--start_seed", &args.start_seed)?);

        let config = SearchConfig {
            p,
            a,
            start_seed,
            margin: args.margin,
            color: !args.no_color && std::io::stdout().is_terminal(),
            threads: args.threads,
        };

        // Surface an unusable modulus before any seed is evaluated.
        config.generator()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvegen_params::nist::NIST_P192;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("seedsearch").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-p", NIST_P192.p, "--start_seed", NIST_P192.seed]).unwrap();
        assert_eq!(args.margin, DEFAULT_SEARCH_MARGIN);
        assert!(args.a.is_none());
        assert_eq!(args.threads, 0);

        let config = SearchConfig::try_from(args).unwrap();
        assert_eq!(config.margin, 100);
        assert_eq!(config.start_seed.to_hex(), NIST_P192.seed.to_lowercase());
        assert_eq!(*config.generator().unwrap().a(), curvegen_algorithms::arith::field_int_from_hex(NIST_P192.a).unwrap());
    }

    #[test]
    fn test_missing_required_flags() {
        assert!(parse(&["--start_seed", "00"]).is_err());
        assert!(parse(&["-p", "17"]).is_err());
    }

    #[test]
    fn test_malformed_hex() {
        let args = parse(&["-p", "zz", "--start_seed", "00"]).unwrap();
        match SearchConfig::try_from(args) {
            Err(SearchError::Hex { flag, .. }) => assert_eq!(flag, "-p"),
            other => panic!("Expected hex error, got {:?}", other),
        }

        let args = parse(&["-p", "17", "--start_seed", "abc"]).unwrap();
        assert!(matches!(
            SearchConfig::try_from(args),
            Err(SearchError::Hex { flag: "--start_seed", .. })
        ));
    }

    #[test]
    fn test_unusable_modulus() {
        let args = parse(&["-p", "01", "--start_seed", "00"]).unwrap();
        let err = SearchConfig::try_from(args).unwrap_err();
        assert!(!err.is_per_seed());
    }

    #[test]
    fn test_offsets() {
        let config = SearchConfig::new(FieldInt::from_u8(23), None, Seed::new(vec![7]), 2);
        assert_eq!(config.offsets().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
    }
}
