//! Argument parsing for the `fixgen` binary.

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use fixgen_cli::cli::{Cli, Commands};
use fixgen_core::{GetUnderflow, MapRecipeKind, RemoveUnderflow, SortCategory};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("fixgen").chain(args.iter().copied()))
}

#[test]
fn map_with_output_dir_only() {
    let cli = parse(&["map", "out/case6"]).unwrap();
    match cli.command {
        Commands::Map {
            output_dir,
            size,
            seed,
            recipe,
            ..
        } => {
            assert_eq!(output_dir, PathBuf::from("out/case6"));
            assert_eq!(size, None);
            assert_eq!(seed, None);
            assert_eq!(recipe, None);
        }
        other => panic!("expected map, got {:?}", other),
    }
}

#[test]
fn map_with_size_seed_and_policies() {
    let cli = parse(&[
        "map",
        "out/case6",
        "10000",
        "--seed",
        "42",
        "--recipe",
        "bulk",
        "--on-remove-underflow",
        "skip",
        "--on-get-underflow",
        "substitute-put",
    ])
    .unwrap();
    match cli.command {
        Commands::Map {
            size,
            seed,
            recipe,
            on_remove_underflow,
            on_get_underflow,
            ..
        } => {
            assert_eq!(size, Some(10_000));
            assert_eq!(seed, Some(42));
            assert_eq!(recipe, Some(MapRecipeKind::Bulk));
            assert_eq!(on_remove_underflow, Some(RemoveUnderflow::Skip));
            assert_eq!(on_get_underflow, Some(GetUnderflow::SubstitutePut));
        }
        other => panic!("expected map, got {:?}", other),
    }
}

#[test]
fn map_without_output_dir_is_an_error() {
    let err = parse(&["map"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn map_size_must_be_an_integer() {
    let err = parse(&["map", "out", "lots"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn unknown_policy_is_rejected() {
    assert!(parse(&["map", "out", "--on-remove-underflow", "sometimes"]).is_err());
}

#[test]
fn sort_with_repeated_categories() {
    let cli = parse(&[
        "sort",
        "cases",
        "1000",
        "--category",
        "edge",
        "--category",
        "special",
        "--include-large-floats",
    ])
    .unwrap();
    match cli.command {
        Commands::Sort {
            output_root,
            large_size,
            categories,
            include_large_floats,
            ..
        } => {
            assert_eq!(output_root, PathBuf::from("cases"));
            assert_eq!(large_size, Some(1000));
            assert_eq!(categories, vec![SortCategory::Edge, SortCategory::Special]);
            assert!(include_large_floats);
        }
        other => panic!("expected sort, got {:?}", other),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&["map-suite", "out", "--verbose", "--config", "ci/fixgen.toml"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("ci/fixgen.toml")));
}

#[test]
fn verbose_and_quiet_conflict() {
    let err = parse(&["-v", "-q", "init"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn verify_requires_a_directory() {
    assert!(parse(&["verify"]).is_err());
    let cli = parse(&["verify", "a", "b"]).unwrap();
    match cli.command {
        Commands::Verify { case_dirs } => assert_eq!(case_dirs.len(), 2),
        other => panic!("expected verify, got {:?}", other),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(parse(&[]).is_err());
}
