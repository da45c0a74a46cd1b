// tests/tests/search_tests.rs
use curvegen_algorithms::arith::field_int_from_hex;
use curvegen_algorithms::curve_gen::Seed;
use curvegen_params::nist::{NIST_P192, NIST_P256};
use clap::Parser;
use curvegen_seedsearch::{search, Args, Reporter, SearchConfig, SearchSummary};
use slog::{o, Discard, Logger};

fn logger() -> Logger {
    Logger::root(Discard, o!())
}

#[test]
fn test_search_from_command_line() {
    let args = Args::try_parse_from([
        "seedsearch",
        "-p",
        NIST_P256.p,
        "--start_seed",
        NIST_P256.seed,
        "--margin",
        "2",
        "--no-color",
    ])
    .unwrap();
    let config = SearchConfig::try_from(args).unwrap();
    assert!(!config.color);

    let candidates = search(&config, &logger()).unwrap();
    assert_eq!(candidates.len(), 5);

    let mut out = Vec::new();
    Reporter::new(config.color)
        .write_all(&mut out, &candidates)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);

    // The start seed is the published one, so its row must be accepted
    assert_eq!(
        lines[2],
        format!("{} OK (start)", NIST_P256.seed.to_lowercase())
    );
    for line in lines {
        assert!(line.contains(" OK") || line.contains(" BAD "));
    }
}

#[test]
fn test_summary_counts_every_candidate() {
    let config = SearchConfig::new(
        field_int_from_hex(NIST_P192.p).unwrap(),
        None,
        Seed::from_hex(NIST_P192.seed).unwrap(),
        4,
    );
    let candidates = search(&config, &logger()).unwrap();
    let summary = SearchSummary::from_candidates(&candidates);
    assert_eq!(summary.accepted + summary.rejected, 9);
    assert!(summary.accepted >= 1);
}
