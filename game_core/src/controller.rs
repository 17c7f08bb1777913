use crate::systems::*;
use crate::{Ball, Config, Events, GameRng, Paddle, Score, Side, SignSource, Snapshot};

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    GameOver,
}

/// One match: two paddles, a ball, the score and the win state.
///
/// Drive it once per frame with `apply_input`, then `tick`, then read
/// `snapshot` for drawing.
///
/// The paddles and ball are public for hosts and tests to inspect and place;
/// move paddles through `Paddle::move_by` so they stay inside the arena.
pub struct Match<R = GameRng> {
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    config: Config,
    score: Score,
    phase: MatchPhase,
    winner: Option<Side>,
    events: Events,
    rng: R,
}

impl Match<GameRng> {
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: SignSource> Match<R> {
    pub fn new(config: Config, mut rng: R) -> Self {
        let start_y = config.paddle_start_y();
        let player = Paddle::new(
            config.player_paddle_x(),
            start_y,
            config.paddle_width,
            config.paddle_height,
            config.arena_height,
        );
        let ai = Paddle::new(
            config.ai_paddle_x(),
            start_y,
            config.paddle_width,
            config.paddle_height,
            config.arena_height,
        );
        let ball = Ball::new(
            config.ball_spawn(),
            config.ball_size,
            config.arena_height,
            &mut rng,
        );

        Self {
            player,
            ai,
            ball,
            config,
            score: Score::new(),
            phase: MatchPhase::Playing,
            winner: None,
            events: Events::new(),
            rng,
        }
    }

    /// Apply one frame of held input.
    ///
    /// While playing, up/down move the player's paddle. After the match is
    /// over, restart starts a new match and quit asks the host to stop.
    pub fn apply_input(&mut self, input: &InputState) -> HostSignal {
        match self.phase {
            MatchPhase::GameOver => {
                if input.restart {
                    self.restart();
                } else if input.quit {
                    log::info!("quit requested");
                    return HostSignal::Quit;
                }
            }
            MatchPhase::Playing => {
                for dy in paddle_moves(input) {
                    self.player.move_by(dy);
                }
            }
        }
        HostSignal::Continue
    }

    /// Advance one frame. Does nothing once the match is over.
    pub fn tick(&mut self) {
        if self.phase == MatchPhase::GameOver {
            return;
        }

        // Clear events at start of frame
        self.events.clear();

        move_ball(&mut self.ball, &mut self.events);
        check_collision(&mut self.ball, &self.player, &self.ai, &mut self.events);

        if check_scoring(
            &mut self.ball,
            &mut self.score,
            self.config.arena_width,
            &mut self.events,
            &mut self.rng,
        )
        .is_some()
        {
            self.check_game_over();
        }

        // Runs on goal ticks too, against the freshly served ball
        self.ai.auto_track(&self.ball);
    }

    /// End the match once either side has reached the winning score
    pub fn check_game_over(&mut self) {
        if self.phase == MatchPhase::GameOver {
            return;
        }
        if let Some(winner) = self.score.has_winner(self.config.winning_score) {
            self.phase = MatchPhase::GameOver;
            self.winner = Some(winner);
            self.events.game_over = true;
            log::info!(
                "{:?} wins {} - {}",
                winner,
                self.score.player,
                self.score.ai
            );
        }
    }

    /// Fresh match: zero scores, new serve, paddles centered
    pub fn restart(&mut self) {
        self.score.reset();
        self.phase = MatchPhase::Playing;
        self.winner = None;
        self.events.clear();
        self.ball.reset(&mut self.rng);
        self.player.recenter();
        self.ai.recenter();
        log::info!("match restarted");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena_width: self.config.arena_width,
            arena_height: self.config.arena_height,
            player_paddle: self.player.bounding_box(),
            ai_paddle: self.ai.bounding_box(),
            ball: self.ball.bounding_box(),
            player_score: self.score.player,
            ai_score: self.score.ai,
            game_over: self.is_game_over(),
            winner: self.winner,
            events: self.events,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn events(&self) -> Events {
        self.events
    }
}
