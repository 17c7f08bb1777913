use crate::{Ball, Events, Score, Side, SignSource};

/// Who scores if the ball has crossed a side boundary this tick
pub fn goal_scorer(ball: &Ball, arena_width: f32) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x >= arena_width {
        Some(Side::Player)
    } else {
        None
    }
}

/// Award a goal if the ball left the arena, then serve again.
/// Returns the side that scored.
pub fn check_scoring(
    ball: &mut Ball,
    score: &mut Score,
    arena_width: f32,
    events: &mut Events,
    rng: &mut impl SignSource,
) -> Option<Side> {
    let scorer = goal_scorer(ball, arena_width)?;

    score.increment(scorer);
    events.scored = Some(scorer);
    log::info!(
        "{:?} scores, player {} - ai {}",
        scorer,
        score.player,
        score.ai
    );

    ball.reset(rng);
    Some(scorer)
}
