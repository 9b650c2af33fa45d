use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eyre::{Result, WrapErr, eyre};
use ftcube_core::{Cube, DEFAULT_SCRAMBLE_LEN, InverseScrambleSolver, SolverSlot, random_scramble};
use ftcube_notation::parse_moves;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::net;

/// ftcube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a scramble to a solved cube and print the result.
    Show {
        /// Scramble in face-turn notation, such as "R U R' U2".
        scramble: String,
    },
    /// Step through a scramble one move at a time.
    Play {
        /// Scramble in face-turn notation.
        scramble: String,

        /// Milliseconds to hold each state on screen.
        #[arg(long, default_value_t = 400)]
        interval_ms: u64,
    },
    /// Print a random scramble.
    Scramble {
        /// Number of moves.
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LEN)]
        len: usize,

        /// RNG seed, for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve a scramble and verify the solution by applying it.
    Solve {
        /// Scramble in face-turn notation.
        scramble: String,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Show { scramble } => {
            let moves = parse_moves(&scramble).wrap_err("invalid scramble")?;
            let cube = Cube::solved().apply_all(&moves);
            print!("{}", net::render(&cube));
            Ok(())
        }

        Subcommand::Play {
            scramble,
            interval_ms,
        } => {
            let moves = parse_moves(&scramble).wrap_err("invalid scramble")?;
            let interval = Duration::from_millis(interval_ms);
            // The state sequence is pure and pull-based; this loop is the
            // pacing driver.
            for (i, state) in Cube::solved().states(&moves).enumerate() {
                if i > 0 {
                    thread::sleep(interval);
                    println!("after {}", moves[i - 1]);
                }
                print!("{}", net::render(&state));
                println!();
            }
            Ok(())
        }

        Subcommand::Scramble { len, seed } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_rng(&mut rand::rng()),
            };
            println!("{}", random_scramble(&mut rng, len));
            Ok(())
        }

        Subcommand::Solve { scramble } => {
            let moves = parse_moves(&scramble).wrap_err("invalid scramble")?;
            let mut slot = SolverSlot::default();
            // A real external solver would be installed here once its
            // initialization signal fires; the built-in inverse solver is
            // ready immediately.
            slot.install(Arc::new(InverseScrambleSolver));
            let solution = slot.solve(&scramble)?;
            log::debug!("verifying {}-move solution", solution.len());
            if !Cube::solved().apply_all(&moves).apply_all(&solution).is_solved() {
                return Err(eyre!("solution \"{solution}\" does not solve \"{scramble}\""));
            }
            println!("{solution}");
            Ok(())
        }
    }
}
