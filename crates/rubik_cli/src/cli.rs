use std::io::Read;
use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use rubik_core::{Cube, CubeState, Move, ScrambledCube, Scrambler, Validator, rotation};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};

/// Rubik's cube scrambler, simulator, and validator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Configuration file (default: `rubik.yaml` in the working directory, if
    /// present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Generate a random scramble and print it along with the scrambled cube.
    Scramble {
        /// Cube size.
        #[arg(short, long)]
        size: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the cube state as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Cube size.
        #[arg(short, long)]
        size: Option<usize>,
        /// Print the cube state as JSON.
        #[arg(long)]
        json: bool,
        /// Moves in standard notation (such as `R U' Fw2 3Lw`).
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Check whether a JSON cube state is reachable and print a report as
    /// JSON.
    Validate {
        /// Cube state file, use '-' for stdin.
        #[arg(value_parser)]
        state_file: clio::Input,
    },
}

/// Cube printed by `scramble` and `apply`.
#[derive(Serialize, Debug)]
struct CubeOutput {
    moves: String,
    cube: CubeState,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let config = CliConfig::load(args.config.as_deref())?;

    match args.subcommand {
        Subcommand::Scramble { size, seed, json } => {
            let size = size.unwrap_or(config.size);
            let ScrambledCube { moves, cube } = match seed.or(config.seed) {
                Some(seed) => Scrambler::from_seed(seed).scramble(size),
                None => Scrambler::new().scramble(size),
            }
            .context("error generating scramble")?;
            print_cube(&moves, &cube, output_format(json, &config))
        }

        Subcommand::Apply { size, json, moves } => {
            let size = size.unwrap_or(config.size);
            let (moves, cube) = apply_notation(size, &moves.join(" "))?;
            print_cube(&moves, &cube, output_format(json, &config))
        }

        Subcommand::Validate { mut state_file } => {
            let mut buffer = String::new();
            state_file
                .read_to_string(&mut buffer)
                .context("error reading cube state")?;
            let cube = parse_cube_state(&buffer)?;

            let report = Validator::new(&cube).validate();
            write_json_output(&report)?;

            match report.failures().count() {
                0 => Ok(()),
                n => Err(eyre!("cube is invalid ({n} failed checks)")),
            }
        }
    }
}

fn output_format(json_flag: bool, config: &CliConfig) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}

/// Parses `notation` and applies it to a solved cube of the given size.
fn apply_notation(size: usize, notation: &str) -> Result<(Vec<Move>, Cube)> {
    let moves = rubik_notation::parse_moves(notation).context("error parsing moves")?;
    let mut cube = Cube::new(size).context("error constructing cube")?;
    for (i, &mv) in moves.iter().enumerate() {
        rotation::turn(&mut cube, mv).with_context(|| format!("error applying move {i} ({mv})"))?;
    }
    log::info!("applied {} moves to {size}x{size}x{size} cube", moves.len());
    Ok((moves, cube))
}

fn parse_cube_state(json: &str) -> Result<Cube> {
    let state: CubeState = serde_json::from_str(json).context("error deserializing cube state")?;
    Ok(Cube::try_from(state)?)
}

fn print_cube(moves: &[Move], cube: &Cube, format: OutputFormat) -> Result<()> {
    let moves = rubik_notation::format_moves(moves);
    match format {
        OutputFormat::Text => {
            println!("{moves}");
            println!();
            print!("{cube}");
            Ok(())
        }
        OutputFormat::Json => write_json_output(&CubeOutput {
            moves,
            cube: cube.state(),
        }),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rubik_core::{Direction, Layer};

    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["rubik", "apply", "--size", "4", "Rw", "U'"]).unwrap();
        match args.subcommand {
            Subcommand::Apply { size, json, moves } => {
                assert_eq!(size, Some(4));
                assert!(!json);
                assert_eq!(moves, ["Rw", "U'"]);
            }
            other => panic!("wrong subcommand {other:?}"),
        }

        let args = Args::try_parse_from(["rubik", "scramble", "--seed", "5", "--json"]).unwrap();
        assert!(matches!(
            args.subcommand,
            Subcommand::Scramble {
                size: None,
                seed: Some(5),
                json: true,
            },
        ));

        assert!(Args::try_parse_from(["rubik", "apply"]).is_err());
    }

    #[test]
    fn test_apply_notation() {
        let (moves, cube) = apply_notation(4, "Rw U' Fw2 Lw'").unwrap();
        assert_eq!(moves[0], Move::new(Layer::Right, Direction::Cw, 2));
        assert_eq!(moves.len(), 4);
        assert!(!cube.is_solved());

        let (_, cube) = apply_notation(3, "R U R' U' U R U' R'").unwrap();
        assert!(cube.is_solved());

        assert!(apply_notation(3, "R Q").is_err());
        assert!(apply_notation(3, "Rw").is_err());
        assert!(apply_notation(1, "R").is_err());
    }

    #[test]
    fn test_parse_cube_state() {
        let (_, cube) = apply_notation(3, "R U2 F'").unwrap();
        let json = serde_json::to_string(&cube.state()).unwrap();
        assert_eq!(parse_cube_state(&json).unwrap(), cube);

        assert!(parse_cube_state(r#"{"dimensions": 2, "state": {}}"#).is_err());
        assert!(parse_cube_state("not json").is_err());
    }
}
