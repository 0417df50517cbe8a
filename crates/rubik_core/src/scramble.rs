//! Random scramble generation.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::{Cube, CubeError, Direction, Layer, Move, rotation};

/// Returns the number of moves in a scramble for a cube of the given size.
pub fn scramble_length(size: usize) -> Result<usize, CubeError> {
    match size {
        0 | 1 => Err(CubeError::InvalidSize(size)),
        2 => Ok(8),
        3 => Ok(20),
        n => Ok((n - 2) * 20),
    }
}

/// Returns whether `mv` may follow the moves in `history`.
///
/// A move is redundant if some move in the window turns the same band.
pub fn is_valid(mv: &Move, history: &[Move]) -> bool {
    !history
        .iter()
        .any(|prev| prev.layer == mv.layer && prev.depth == mv.depth)
}

/// Returns whether `mv` turns the same axis as the window in `history`, in
/// which case it should be appended to the window instead of starting a new
/// one.
pub fn should_extend(mv: &Move, history: &[Move]) -> bool {
    history
        .first()
        .is_some_and(|first| mv.layer == first.layer || mv.layer == first.layer.opposite())
}

/// Takes moves from `candidates` until `length` of them have been accepted,
/// discarding any that are redundant with the moves before them.
///
/// Returns fewer than `length` moves only if `candidates` runs out.
pub fn filter_redundant(length: usize, candidates: impl IntoIterator<Item = Move>) -> Vec<Move> {
    let mut history: Vec<Move> = vec![];
    let mut ret = Vec::with_capacity(length);
    let mut candidates = candidates.into_iter();
    while ret.len() < length {
        let Some(mv) = candidates.next() else { break };
        if !is_valid(&mv, &history) {
            log::trace!("rejecting redundant scramble move {mv}");
            continue;
        }
        if should_extend(&mv, &history) {
            history.push(mv);
        } else {
            history = vec![mv];
        }
        ret.push(mv);
    }
    ret
}

/// Cube together with the scramble that produced it from a solved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Moves of the scramble, in order.
    pub moves: Vec<Move>,
    /// Result of applying `moves` to a solved cube.
    pub cube: Cube,
}

/// Random scramble generator.
#[derive(Debug, Clone)]
pub struct Scrambler<R> {
    rng: R,
}

impl Scrambler<ThreadRng> {
    /// Constructs a scrambler using the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for Scrambler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler<ChaCha12Rng> {
    /// Constructs a scrambler that always produces the same scrambles for a
    /// given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha12Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scrambler<R> {
    /// Constructs a scrambler using `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a random move for a cube of the given size.
    ///
    /// On a 2x2x2 only `UP`, `FRONT`, and `RIGHT` are turned, since turning the
    /// opposite face is the same up to a rotation of the whole cube. Wide moves
    /// are only generated for sizes of at least 4.
    pub fn random_move(&mut self, size: usize) -> Move {
        const LAYERS_2X2: [Layer; 3] = [Layer::Up, Layer::Front, Layer::Right];
        const DIRECTIONS: [Direction; 3] = [Direction::Cw, Direction::Ccw, Direction::Double];

        let layer = if size == 2 {
            LAYERS_2X2[self.rng.random_range(0..LAYERS_2X2.len())]
        } else {
            Layer::ALL[self.rng.random_range(0..Layer::COUNT)]
        };
        let direction = DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())];
        let depth = if size <= 3 {
            1
        } else {
            self.rng.random_range(1..=size / 2)
        };
        Move::new(layer, direction, depth)
    }

    /// Generates a scramble for a cube of the given size.
    pub fn generate(&mut self, size: usize) -> Result<Vec<Move>, CubeError> {
        let length = scramble_length(size)?;
        let moves = filter_redundant(length, std::iter::repeat_with(|| self.random_move(size)));
        log::debug!("generated {}-move scramble for size {size}", moves.len());
        Ok(moves)
    }

    /// Generates a scramble and applies it to a solved cube.
    pub fn scramble(&mut self, size: usize) -> Result<ScrambledCube, CubeError> {
        let moves = self.generate(size)?;
        let mut cube = Cube::new(size)?;
        rotation::turn_all(&mut cube, &moves)?;
        Ok(ScrambledCube { moves, cube })
    }
}
