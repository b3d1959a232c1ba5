// Uniform-random targeting for the computer player. The only memory of
// prior shots is what the cell states already encode.

use rand::Rng;

use crate::grid::Grid;

/// Choose a target uniformly among cells not yet resolved to a hit or a
/// miss. Returns `None` once every cell has been shot.
pub fn select_random_target<R: Rng>(grid: &Grid, rng: &mut R) -> Option<(usize, usize)> {
    let candidates: Vec<(usize, usize)> = grid
        .iter_cells()
        .filter(|&(_, _, cell)| cell.is_unresolved())
        .map(|(row, col, _)| (row, col))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
