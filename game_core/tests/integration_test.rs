use game_core::*;
use glam::Vec2;
use proptest::prelude::*;

/// Serve direction scripted by the test
struct Signs {
    seq: Vec<f32>,
    next: usize,
}

impl Signs {
    fn new(seq: &[f32]) -> Self {
        Self {
            seq: seq.to_vec(),
            next: 0,
        }
    }
}

impl SignSource for Signs {
    fn sign(&mut self) -> f32 {
        let s = self.seq[self.next % self.seq.len()];
        self.next += 1;
        s
    }
}

/// Put the ball one step from the left goal line, well clear of the paddle
fn send_left<R: SignSource>(m: &mut Match<R>) {
    m.ball.pos = Vec2::new(3.0, 40.0);
    m.ball.prev_pos = m.ball.pos;
    m.ball.vel = Vec2::new(-5.0, 3.0);
}

/// Put the ball one step from the right goal line, well clear of the paddle
fn send_right<R: SignSource>(m: &mut Match<R>) {
    m.ball.pos = Vec2::new(797.0, 40.0);
    m.ball.prev_pos = m.ball.pos;
    m.ball.vel = Vec2::new(5.0, 3.0);
}

#[test]
fn test_ai_wins_after_five_goals() {
    let mut m = Match::new(Config::new(), Signs::new(&[1.0]));

    for goal in 1..=5u8 {
        assert!(!m.is_game_over(), "Match should still be running before goal {}", goal);
        send_left(&mut m);
        m.tick();

        assert_eq!(m.score().ai, goal);
        assert_eq!(m.events().scored, Some(Side::Ai));
        assert_eq!(m.ball.pos, m.ball.spawn, "Ball reset after goal {}", goal);
        assert_eq!(m.ball.vel, Vec2::new(5.0, 3.0));
    }

    assert!(m.is_game_over());
    assert_eq!(m.phase(), MatchPhase::GameOver);
    assert_eq!(m.winner(), Some(Side::Ai));
    assert_eq!(m.score(), Score { player: 0, ai: 5 });

    let snap = m.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.winner, Some(Side::Ai));
}

#[test]
fn test_restart_after_player_win() {
    let mut m = Match::with_seed(Config::new(), 42);

    for _ in 0..3 {
        send_left(&mut m);
        m.tick();
    }
    for _ in 0..5 {
        send_right(&mut m);
        m.tick();
    }
    m.player.move_by(-120.0);

    assert_eq!(m.winner(), Some(Side::Player));
    assert_eq!(m.score(), Score { player: 5, ai: 3 });

    let signal = m.apply_input(&InputState {
        restart: true,
        ..InputState::new()
    });

    assert_eq!(signal, HostSignal::Continue);
    assert_eq!(m.score(), Score { player: 0, ai: 0 });
    assert!(!m.is_game_over());
    assert_eq!(m.winner(), None);
    assert_eq!(m.player.y, 600.0 / 2.0 - 100.0 / 2.0);
    assert_eq!(m.ai.y, 600.0 / 2.0 - 100.0 / 2.0);
    assert_eq!(m.ball.pos, m.ball.spawn);
}

#[test]
fn test_rally_off_player_paddle() {
    let mut m = Match::new(Config::new(), Signs::new(&[-1.0, 1.0]));
    assert_eq!(m.ball.vel, Vec2::new(-5.0, 3.0));

    // Line the ball up with the player's paddle center, one step away
    m.ball.pos = Vec2::new(24.0, 296.5);
    m.ball.prev_pos = m.ball.pos;
    m.ball.vel = Vec2::new(-5.0, 0.0);

    m.tick();

    assert_eq!(m.events().paddle_hit, Some(Side::Player));
    assert!(m.ball.vel.x > 5.0, "Ball should come back faster");
    assert_eq!(m.ball.pos.x, 21.0);
    assert_eq!(m.score(), Score::new());
}

#[test]
fn test_high_speed_ball_cannot_tunnel_through_ai_paddle() {
    let mut m = Match::new(Config::new(), Signs::new(&[1.0]));
    m.ball.pos = Vec2::new(770.0, 296.5);
    m.ball.prev_pos = m.ball.pos;
    m.ball.vel = Vec2::new(40.0, 0.0);

    m.tick();

    // Without the sweep the ball would land at 810 and count as a goal
    assert_eq!(m.events().paddle_hit, Some(Side::Ai));
    assert_eq!(m.events().scored, None);
    assert_eq!(m.ball.pos.x, 780.0 - 7.0 - 1.0);
    assert!(m.ball.vel.x < 0.0);
}

#[test]
fn test_seeded_matches_are_deterministic() {
    let mut a = Match::with_seed(Config::new(), 7);
    let mut b = Match::with_seed(Config::new(), 7);
    let input = InputState {
        down: true,
        ..InputState::new()
    };

    for _ in 0..2000 {
        a.apply_input(&input);
        a.tick();
        b.apply_input(&input);
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_reset_velocity_independent_of_rally_speed() {
    let mut m = Match::with_seed(Config::new(), 3);
    for _ in 0..20 {
        send_left(&mut m);
        m.ball.vel = Vec2::new(-37.0, 21.0);
        m.restart();
        assert!(m.ball.vel.x == 5.0 || m.ball.vel.x == -5.0);
        assert!(m.ball.vel.y == 3.0 || m.ball.vel.y == -3.0);
    }
}

fn input_strategy() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(up, down, restart)| InputState {
        up,
        down,
        restart,
        quit: false,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_paddles_stay_in_arena(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut m = Match::with_seed(Config::new(), seed);
        let max_y = 600.0 - 100.0;

        for input in &inputs {
            m.apply_input(input);
            m.tick();

            prop_assert!(m.player.y >= 0.0 && m.player.y <= max_y, "player y {}", m.player.y);
            prop_assert!(m.ai.y >= 0.0 && m.ai.y <= max_y, "ai y {}", m.ai.y);
        }
    }

    #[test]
    fn prop_game_over_iff_someone_reached_win_score(
        seed in any::<u64>(),
        ticks in 1usize..3000,
    ) {
        let mut m = Match::with_seed(Config::new(), seed);
        for _ in 0..ticks {
            m.tick();
            let score = m.score();
            let reached = score.player >= 5 || score.ai >= 5;
            prop_assert_eq!(m.is_game_over(), reached);
            prop_assert!(score.player <= 5 && score.ai <= 5);
            prop_assert!(!(score.player >= 5 && score.ai >= 5));
        }
    }
}
