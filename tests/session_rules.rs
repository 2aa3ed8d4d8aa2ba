//! End-to-end checks of the session rules through the public API

use dodge_runner::Settings;
use dodge_runner::consts::*;
use dodge_runner::sim::{
    CollisionEvent, GameEvent, GameSession, HeldIntents, Intent, PlatformSide, SessionPhase,
    SimError,
};

const HIT: CollisionEvent = CollisionEvent::Obstacle { id: 1 };

fn session_with_lives(lives: u32) -> GameSession {
    GameSession::new(Settings {
        starting_lives: lives,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn ten_score_ticks_bring_one_level_and_one_obstacle() {
    let mut session = GameSession::new(Settings::default()).unwrap();
    let before = session.obstacles().len();

    for _ in 0..10 {
        session.advance_clock(1000);
    }

    let world = session.world();
    assert_eq!(world.score, 10);
    assert_eq!(world.level, 1);
    assert_eq!(world.scroll_speed, 2.0);
    assert_eq!(world.obstacle_speed, -130.0);
    assert_eq!(session.obstacles().len(), before + 1);
}

#[test]
fn restart_after_one_crash_keeps_two_lives() {
    let mut session = session_with_lives(3);
    session.advance_clock(12_000);
    session.handle_collision(HIT).unwrap();

    let next = session.restart().unwrap();
    assert_eq!(next.phase(), SessionPhase::Playing);
    assert_eq!(next.world().lives, 2);
    assert_eq!(next.world().score, 0);
    assert_eq!(next.world().level, 0);
}

#[test]
fn restart_with_no_lives_is_rejected() {
    let mut session = session_with_lives(1);
    session.handle_collision(HIT).unwrap();

    assert!(matches!(session.restart(), Err(SimError::InvalidTransition { .. })));
    assert_eq!(session.phase(), SessionPhase::GameOverFinal);
    assert_eq!(session.world().lives, 0);
}

#[test]
fn whole_run_uses_every_life_then_stops() {
    let mut session = session_with_lives(3);
    let mut phases = Vec::new();

    loop {
        session.advance_clock(1500);
        phases.push(session.handle_collision(HIT).unwrap());
        match session.restart() {
            Ok(next) => session = next,
            Err(_) => break,
        }
    }

    assert_eq!(
        phases,
        vec![
            SessionPhase::GameOverRetryable,
            SessionPhase::GameOverRetryable,
            SessionPhase::GameOverFinal
        ]
    );
    assert_eq!(session.attempt(), 2);
    assert_eq!(session.hud().game_over, "Game Over! No more lives");
}

#[test]
fn score_and_level_frozen_after_game_over() {
    let mut session = session_with_lives(2);
    session.advance_clock(10_500);
    session
        .handle_collision(CollisionEvent::Platform(PlatformSide::Floor))
        .unwrap();
    let (score, level) = (session.world().score, session.world().level);

    for _ in 0..100 {
        session.advance_clock(1000);
        session.update(&HeldIntents::default());
    }
    assert_eq!(session.world().score, score);
    assert_eq!(session.world().level, level);
    assert!(!session.timers_active());
}

#[test]
fn offscreen_obstacle_comes_back_on_next_step() {
    let mut session = GameSession::new(Settings::default()).unwrap();
    session.advance_clock(10_000);
    let width = session.obstacles().iter().next().unwrap().width();

    {
        let (_, obstacles) = session.bodies_mut();
        let obstacle = obstacles.iter_mut().next().unwrap();
        obstacle.pos.x = -width - 0.5;
    }
    session.update(&HeldIntents::default());

    let obstacle = session.obstacles().iter().next().unwrap();
    assert_eq!(session.obstacles().len(), 1);
    assert_eq!(obstacle.pos.x, RIGHT_BOUND);
    assert!((100.0..=600.0).contains(&obstacle.pos.y));
}

#[test]
fn up_and_left_gives_upward_velocity_only() {
    let held = HeldIntents {
        up: true,
        left: true,
        ..Default::default()
    };
    assert_eq!(held.resolve(), Intent::Up);

    let mut session = GameSession::new(Settings::default()).unwrap();
    session.update(&held);
    assert_eq!(session.player().vel.x, 0.0);
    assert_eq!(session.player().vel.y, PLAYER_JUMP_VELOCITY);
}

#[test]
fn obstacle_count_never_shrinks_during_a_session() {
    let mut session = GameSession::new(Settings::default()).unwrap();
    let mut last = 0;
    for _ in 0..60 {
        session.advance_clock(5000);
        for _ in 0..200 {
            session.update(&HeldIntents::default());
        }
        let count = session.obstacles().len();
        assert!(count >= last);
        last = count;
    }
    assert_eq!(last, 30);
}

#[test]
fn bounded_pool_respects_cap() {
    let mut session = GameSession::new(Settings {
        max_obstacles: Some(3),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(session.obstacles().capacity(), Some(3));
    session.advance_clock(100_000);
    assert_eq!(session.world().level, 10);
    assert_eq!(session.obstacles().len(), 3);
}

#[test]
fn one_game_over_sound_per_crash() {
    let mut session = session_with_lives(3);
    let mut sounds = 0;

    for _ in 0..3 {
        session.handle_collision(HIT).unwrap();
        let _ = session.handle_collision(HIT);
        sounds += session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlaySound(_)))
            .count();
        if let Ok(next) = session.restart() {
            session = next;
        }
    }
    assert_eq!(sounds, 3);
}
