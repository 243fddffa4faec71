//! Arg-max selection over the direction catalog.

use crate::direction::{Direction, Heading};
use crate::score::{ScoreContext, evaluate_path};

/// A committed plan: the winning direction, its heading, how long to follow
/// it, and the score it won with. Replaced wholesale on every re-plan, never
/// partially updated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub direction: Direction,
    pub heading: Heading,
    pub duration: f64,
    pub score: f64,
}

/// One candidate direction paired with its evaluated score.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredDirection {
    pub direction: Direction,
    pub score: f64,
}

/// Scores every candidate in the order given.
pub fn evaluate_all(directions: &[Direction], ctx: &ScoreContext<'_>) -> Vec<ScoredDirection> {
    directions
        .iter()
        .map(|&direction| ScoredDirection {
            direction,
            score: evaluate_path(direction, ctx),
        })
        .collect()
}

/// Evaluates all candidates and picks the maximum.
///
/// Ties resolve to the earliest entry (strict `>` comparison), so with the
/// standard catalog "stay" wins ties against any equally-scored move. An
/// empty candidate slice falls back to a zero-vector path with score 0.
pub fn select_best_path(
    directions: &[Direction],
    ctx: &ScoreContext<'_>,
) -> (Path, Vec<ScoredDirection>) {
    let scored = evaluate_all(directions, ctx);

    let Some(first) = scored.first() else {
        let fallback = Path {
            direction: Direction::Stay,
            heading: Heading::ZERO,
            duration: ctx.path_duration,
            score: 0.0,
        };
        return (fallback, scored);
    };

    let mut best = *first;
    for candidate in &scored[1..] {
        if candidate.score > best.score {
            best = *candidate;
        }
    }

    let path = Path {
        direction: best.direction,
        heading: best.direction.heading(),
        duration: ctx.path_duration,
        score: best.score,
    };
    (path, scored)
}
