//! Shape recognition around the piece just placed.
//!
//! Each template is tried with two strategies:
//!
//! - **Linear**: for evenly spaced straight templates. Walks the template's
//!   own step direction through the last move and takes the first `size`
//!   owned cells of that run. The owned cells do not have to be adjacent
//!   within the run.
//! - **Exact shape**: for everything else, and for straight templates the
//!   linear walk did not satisfy. Every variant is translated so each of
//!   its points in turn lands on the last move, and kept if all cells are
//!   on the board and owned by the player.
//!
//! A template reported by the linear strategy is not searched again with
//! the exact strategy. Results carrying the same template id and the same
//! set of cells are reported once.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Coord, PlayerId};
use crate::shapes::{expand, Positions, ShapeTemplate};

use super::result::ScoreResult;

/// Longest run the linear walk can produce for catalog shapes.
const RUN_CAPACITY: usize = 11;

/// All shapes completed by `player`'s piece at `last_move`.
///
/// Templates are examined in order. A template can be reported several times
/// when distinct occurrences pass through the last move.
///
/// ```
/// use shape_drop::core::{Board, Coord, PlayerId};
/// use shape_drop::scoring::check_patterns;
/// use shape_drop::shapes::ShapeLibrary;
///
/// let mut board = Board::new();
/// board.drop_piece(0, PlayerId::FIRST);
/// board.drop_piece(1, PlayerId::FIRST);
/// let last = board.drop_piece(2, PlayerId::FIRST).unwrap();
///
/// let library = ShapeLibrary::standard();
/// let line = library.get("3-line").unwrap().clone();
/// let results = check_patterns(&board, last, PlayerId::FIRST, &[line]);
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].points, 1);
/// ```
#[must_use]
pub fn check_patterns(
    board: &Board,
    last_move: Coord,
    player: PlayerId,
    templates: &[ShapeTemplate],
) -> Vec<ScoreResult> {
    let mut results = Vec::new();
    let mut seen: FxHashSet<(&str, Positions)> = FxHashSet::default();

    for template in templates {
        if template.positions.is_empty() {
            continue;
        }

        let mut candidates: Vec<Positions> = match_linear(board, last_move, player, template)
            .into_iter()
            .collect();
        if candidates.is_empty() {
            candidates = match_exact(board, last_move, player, template);
        }

        for cells in candidates {
            let mut key = cells.clone();
            key.sort_unstable();
            if seen.insert((template.id.as_str(), key)) {
                results.push(ScoreResult::new(template, cells));
            }
        }
    }

    if !results.is_empty() {
        trace!(
            %player,
            %last_move,
            matched = ?results.iter().map(|r| r.template.id.as_str()).collect::<Vec<_>>(),
            "shapes completed"
        );
    }
    results
}

/// Linear strategy for one template.
///
/// `None` when the template is not an evenly spaced straight run, or when
/// fewer than `size` owned cells lie on the run through `last_move`.
#[must_use]
pub fn match_linear(
    board: &Board,
    last_move: Coord,
    player: PlayerId,
    template: &ShapeTemplate,
) -> Option<Positions> {
    let step = template.linear_step()?;
    let size = template.size();
    let reach = (size - 1) as i32;

    let walk = |direction: Coord| {
        (1..=reach)
            .map(move |k| last_move + direction * k)
            .take_while(|c| c.in_bounds())
    };

    let mut run: SmallVec<[Coord; RUN_CAPACITY]> = walk(-step).collect();
    run.reverse();
    run.push(last_move);
    run.extend(walk(step));

    let owned: Positions = run
        .into_iter()
        .filter(|&c| board.is_owned_by(c, player))
        .take(size)
        .collect();

    (owned.len() == size).then_some(owned)
}

/// Exact-shape strategy for one template.
///
/// Returns every distinct occurrence (by cell set) that contains
/// `last_move`, cells in variant order.
#[must_use]
pub fn match_exact(
    board: &Board,
    last_move: Coord,
    player: PlayerId,
    template: &ShapeTemplate,
) -> Vec<Positions> {
    let mut seen: FxHashSet<Positions> = FxHashSet::default();
    let mut found = Vec::new();

    for variant in expand(template) {
        for &anchor in &variant {
            let offset = last_move - anchor;
            let cells: Positions = variant.iter().map(|&p| p + offset).collect();

            if !cells.iter().all(|&c| board.is_owned_by(c, player)) {
                continue;
            }

            let mut key = cells.clone();
            key.sort_unstable();
            if seen.insert(key) {
                found.push(cells);
            }
        }
    }

    found
}
