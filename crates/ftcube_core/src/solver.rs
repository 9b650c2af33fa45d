use std::fmt;
use std::sync::Arc;

use ftcube_notation::{MoveSeq, ParseError, parse_moves};
use thiserror::Error;

/// Error produced when requesting a solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Solve requested before a solver was installed.
    #[error("solver is not ready")]
    Unavailable,
    /// The solver produced no solution.
    #[error("no solution produced")]
    NoSolution,
    /// The solver's output was not valid notation.
    #[error("unparsable solver output: {0}")]
    BadNotation(#[from] ParseError),
}

/// External solving capability: notation in, notation out.
///
/// Given a scramble string, an implementation returns a move string that
/// restores the solved state when applied after the scramble. The search
/// itself lives behind this boundary; this crate never inspects it.
pub trait Solver: Send + Sync {
    /// Returns a solution string for `scramble`. An empty or unparsable
    /// return value means no solution was produced.
    fn solve(&self, scramble: &str) -> String;
}

/// Slot for a solver that becomes available asynchronously.
///
/// The slot starts out [`NotReady`](SolverSlot::NotReady); once the external
/// solver's one-time initialization signal fires, [`install`](Self::install)
/// flips it to ready. Callers check [`is_ready`](Self::is_ready) before
/// offering solve affordances rather than threading a nullable handle
/// through call sites.
#[derive(Default, Clone)]
pub enum SolverSlot {
    /// No solver has been installed yet.
    #[default]
    NotReady,
    /// A solver is installed and may be invoked.
    Ready(Arc<dyn Solver>),
}

impl fmt::Debug for SolverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "SolverSlot::NotReady"),
            Self::Ready(_) => write!(f, "SolverSlot::Ready"),
        }
    }
}

impl SolverSlot {
    /// Whether a solver is installed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Installs a solver, making the slot ready.
    pub fn install(&mut self, solver: Arc<dyn Solver>) {
        *self = Self::Ready(solver);
    }

    /// Invokes the installed solver on `scramble` and parses its output.
    ///
    /// An empty scramble is a no-op and succeeds with an empty sequence
    /// without consulting the solver. Otherwise fails with
    /// [`SolveError::Unavailable`] if no solver is installed, and with
    /// [`SolveError::NoSolution`] or [`SolveError::BadNotation`] if the
    /// solver's output is empty or unparsable.
    pub fn solve(&self, scramble: &str) -> Result<MoveSeq, SolveError> {
        if scramble.trim().is_empty() {
            return Ok(MoveSeq::new());
        }
        match self {
            Self::NotReady => Err(SolveError::Unavailable),
            Self::Ready(solver) => {
                let output = solver.solve(scramble);
                if output.trim().is_empty() {
                    return Err(SolveError::NoSolution);
                }
                let solution = parse_moves(&output)?;
                log::debug!("solver produced {} moves", solution.len());
                Ok(solution)
            }
        }
    }
}

/// Stand-in solver that undoes a scramble by replaying it backwards.
///
/// A real solver searches for a short solution; this one just inverts the
/// scramble, which is enough to exercise the solver boundary end to end.
#[derive(Debug, Default, Copy, Clone)]
pub struct InverseScrambleSolver;

impl Solver for InverseScrambleSolver {
    fn solve(&self, scramble: &str) -> String {
        match parse_moves(scramble) {
            Ok(seq) => seq.inv().to_string(),
            // Unparsable scramble: report "no solution".
            Err(_) => String::new(),
        }
    }
}
