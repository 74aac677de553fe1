use arena::{
    ArenaSimulation, Combatant, EnemyId, GameEvent, MatchConfig, MatchPhase, PlayerInput,
    StartOptions,
};

const DT: f32 = 1.0 / 60.0;

fn started(options: StartOptions) -> ArenaSimulation {
    let mut sim = ArenaSimulation::new(MatchConfig::default());
    sim.start(options).unwrap();
    sim
}

fn enemy_ids(sim: &ArenaSimulation) -> Vec<EnemyId> {
    sim.enemies().map(|e| e.id()).collect()
}

fn run(sim: &mut ArenaSimulation, ticks: usize) {
    let idle = PlayerInput::new();
    for _ in 0..ticks {
        sim.tick(&idle, DT);
    }
}

#[test]
fn test_victory_save_score_and_replay() {
    let mut sim = started(StartOptions::default());

    for id in enemy_ids(&sim) {
        sim.damage_enemy(id, 1000).unwrap();
    }
    assert_eq!(sim.phase(), MatchPhase::Victory);
    assert_eq!(sim.context().kills(), 8);

    assert_eq!(sim.save_score("ace").unwrap(), Some(0));
    assert_eq!(sim.leaderboard().len(), 1);
    assert_eq!(sim.leaderboard().best().unwrap().kills, 8);

    assert_eq!(sim.phase(), MatchPhase::Playing);
    assert_eq!(sim.context().kills(), 0);
    assert_eq!(sim.roster().living_count(), 8);
}

#[test]
fn test_game_over_freezes_world_until_reset() {
    let mut sim = started(StartOptions::default());
    sim.damage_player(100);
    assert_eq!(sim.phase(), MatchPhase::GameOver);

    let before: Vec<_> = sim.enemies().map(|e| e.position).collect();
    run(&mut sim, 60);
    let after: Vec<_> = sim.enemies().map(|e| e.position).collect();
    assert_eq!(before, after);

    sim.reset().unwrap();
    assert_eq!(sim.phase(), MatchPhase::Playing);
    assert_eq!(sim.player().health().current(), 100);
    assert!(sim.bullets().is_empty());
}

#[test]
fn test_kills_after_game_over_are_not_counted() {
    let mut sim = started(StartOptions::default());
    let first = enemy_ids(&sim)[0];
    sim.damage_player(100);

    sim.damage_enemy(first, 1000).unwrap();

    assert_eq!(sim.phase(), MatchPhase::GameOver);
    assert_eq!(sim.context().kills(), 0);
}

#[test]
fn test_return_to_menu_clears_round() {
    let mut sim = started(StartOptions::default());
    assert!(sim.return_to_menu().is_err());

    sim.damage_player(1000);
    sim.return_to_menu().unwrap();

    assert_eq!(sim.phase(), MatchPhase::Menu);
    assert_eq!(sim.roster().len(), 0);
    assert!(sim.reset().is_err());
    sim.start(StartOptions::default()).unwrap();
    assert_eq!(sim.roster().len(), 8);
}

#[test]
fn test_enemies_engage_an_idle_player() {
    let mut sim = started(StartOptions::default());

    run(&mut sim, 60 * 20);

    let hurt = sim.player().health().current() < 100 || sim.phase() == MatchPhase::GameOver;
    assert!(hurt);
    let events = sim.drain_events();
    assert!(events.iter().any(|p| matches!(p.event, GameEvent::EnemyShotFired { .. })));
}

#[test]
fn test_infinite_lives_survive_a_long_match() {
    let mut sim = started(StartOptions {
        infinite_lives: true,
        ..Default::default()
    });

    run(&mut sim, 60 * 20);

    assert_eq!(sim.phase(), MatchPhase::Playing);
    assert_eq!(sim.player().health().current(), 100);
}

#[test]
fn test_same_seed_same_match() {
    let mut a = started(StartOptions::default());
    let mut b = started(StartOptions::default());

    run(&mut a, 300);
    run(&mut b, 300);

    let positions = |sim: &ArenaSimulation| sim.enemies().map(|e| e.position).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));
    assert_eq!(a.player().health().current(), b.player().health().current());
}

#[test]
fn test_dead_enemies_leave_after_death_delay() {
    let mut sim = started(StartOptions {
        infinite_lives: true,
        ..Default::default()
    });
    let first = enemy_ids(&sim)[0];
    sim.damage_enemy(first, 100).unwrap();

    run(&mut sim, 110);
    assert!(sim.roster().get(first).is_some());

    run(&mut sim, 20);
    assert!(sim.roster().get(first).is_none());
    assert_eq!(sim.roster().len(), 7);
}
