//! Exchange resolution through the full state machine.
//!
//! Each test sets up fighters with specific stats, plays one exchange and
//! checks the outcome, the damage, who took it and which events fired.

use dice_duel::combat::{
    describe_resolution, CombatEvent, MatchMode, MatchState, Outcome, Phase, RollOrigin,
};
use dice_duel::core::{Character, CharacterId, DieRoll, ResolutionRules, Side, SideMap};

fn die(v: i64) -> DieRoll {
    DieRoll::new(v).unwrap()
}

fn fighter(id: &str, attack: i32, defense: i32) -> Character {
    Character::new(CharacterId::new(id), id, 100, attack, defense).unwrap()
}

fn duel(p1: Character, p2: Character, rules: ResolutionRules) -> MatchState {
    MatchState::new(SideMap::from_pair(p1, p2), rules, MatchMode::Local)
}

/// Play P1's attack roll, then P2's defend roll.
fn exchange(state: &mut MatchState, attack: i64, defend: i64) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    state.submit_roll(die(attack), RollOrigin::Local, &mut events).unwrap();
    state.submit_roll(die(defend), RollOrigin::Local, &mut events).unwrap();
    events
}

/// (7 + 4) - (3 + 1) = 7: a hit for 7 on the defender.
#[test]
fn test_hit_damages_defender() {
    let mut state = duel(fighter("a", 4, 0), fighter("b", 0, 1), ResolutionRules::default());
    let events = exchange(&mut state, 7, 3);

    let r = *state.last_resolution().unwrap();
    assert_eq!(r.diff, 7);
    assert_eq!(r.outcome, Outcome::Hit);
    assert_eq!(state.health(Side::P2), 93);
    assert_eq!(state.health(Side::P1), 100);
    assert_eq!(
        events,
        vec![
            CombatEvent::DiceRolled { value: die(7) },
            CombatEvent::DiceRolled { value: die(3) },
            CombatEvent::Attack { side: Side::P1 },
            CombatEvent::Damage { side: Side::P2, amount: 7 },
        ]
    );
    assert_eq!(describe_resolution(&r), "Result: (7 + 4) - (3 + 1) = 7. Damage: 7");
}

/// (3 + 4) - (5 + 4) = -2: inside the block band, nobody is hurt.
#[test]
fn test_block_band() {
    let mut state = duel(fighter("a", 4, 0), fighter("b", 0, 4), ResolutionRules::default());
    let events = exchange(&mut state, 3, 5);

    let r = state.last_resolution().unwrap();
    assert_eq!(r.diff, -2);
    assert_eq!(r.outcome, Outcome::Blocked);
    assert_eq!(r.damage, 0);
    assert_eq!(state.health(Side::P1), 100);
    assert_eq!(state.health(Side::P2), 100);
    assert_eq!(
        events[2..],
        [
            CombatEvent::Block { side: Side::P2 },
            CombatEvent::Damage { side: Side::P2, amount: 0 },
        ]
    );
}

/// (1 + 1) - (8 + 5) = -11: the defender counters for 11.
#[test]
fn test_counter_damages_attacker() {
    let mut state = duel(fighter("a", 1, 0), fighter("b", 0, 5), ResolutionRules::default());
    let events = exchange(&mut state, 1, 8);

    let r = state.last_resolution().unwrap();
    assert_eq!(r.diff, -11);
    assert_eq!(r.outcome, Outcome::Counter);
    assert_eq!(r.damage, 11);
    assert_eq!(state.health(Side::P1), 89);
    assert_eq!(state.health(Side::P2), 100);
    assert_eq!(
        events[2..],
        [
            CombatEvent::Counter { side: Side::P2 },
            CombatEvent::Damage { side: Side::P1, amount: 11 },
        ]
    );
}

/// diff = -3 is the first value outside the default band.
#[test]
fn test_band_boundary() {
    let mut state = duel(fighter("a", 0, 0), fighter("b", 0, 0), ResolutionRules::default());
    exchange(&mut state, 2, 5);
    let r = state.last_resolution().unwrap();
    assert_eq!(r.diff, -3);
    assert_eq!(r.outcome, Outcome::Counter);
    assert_eq!(state.health(Side::P1), 97);
}

/// With classic rules a bad attack is simply blocked.
#[test]
fn test_classic_rules_block_everything_non_positive() {
    let mut state = duel(fighter("a", 1, 0), fighter("b", 0, 5), ResolutionRules::classic());
    exchange(&mut state, 1, 8);

    let r = state.last_resolution().unwrap();
    assert_eq!(r.diff, -11);
    assert_eq!(r.outcome, Outcome::Blocked);
    assert_eq!(state.health(Side::P1), 100);
    assert_eq!(state.health(Side::P2), 100);
}

/// Damage never drives health below zero, and an overkill still ends the match.
#[test]
fn test_overkill_clamps_to_zero() {
    let p2 = Character::new(CharacterId::new("b"), "b", 3, 0, 0).unwrap();
    let mut state = duel(fighter("a", 9, 0), p2, ResolutionRules::default());
    let events = exchange(&mut state, 10, 1);

    assert_eq!(state.health(Side::P2), 0);
    assert!(state.is_game_over());
    assert_eq!(state.winner(), Some(Side::P1));
    assert_eq!(state.phase(), Phase::P2DefendRoll);
    // The full damage is still reported.
    assert!(events.contains(&CombatEvent::Damage { side: Side::P2, amount: 18 }));
    assert_eq!(events.last(), Some(&CombatEvent::GameOver { winner: Side::P1 }));
}
