//! Turn-cycle tests.
//!
//! These tests drive whole rounds through the public API and check that the
//! phase sequence and the per-phase roller never drift.

use dice_duel::combat::{CombatEvent, MatchMode, MatchState, NullNotifier, Phase, Role, RollOrigin};
use dice_duel::core::{Character, CharacterId, DieRoll, ResolutionRules, Side, SideMap};

fn die(v: i64) -> DieRoll {
    DieRoll::new(v).unwrap()
}

/// Two sturdy fighters with equal stats so nobody dies during the test.
fn sturdy_match(mode: MatchMode) -> MatchState {
    let fighter = |id: &str| Character::new(CharacterId::new(id), id, 10_000, 3, 3).unwrap();
    MatchState::new(
        SideMap::from_pair(fighter("a"), fighter("b")),
        ResolutionRules::default(),
        mode,
    )
}

/// Every four accepted rolls bring the match back to P1_ATTACK_ROLL.
#[test]
fn test_cycle_closes_every_four_rolls() {
    let mut state = sturdy_match(MatchMode::Local);
    let rolls = [4, 9, 2, 7, 10, 1, 5, 5, 3, 8, 6, 6];

    for (i, &v) in rolls.iter().enumerate() {
        assert_eq!(state.phase(), Phase::CYCLE[i % 4]);
        state.submit_roll(die(v), RollOrigin::Local, &mut NullNotifier).unwrap();
    }
    assert_eq!(state.phase(), Phase::P1AttackRoll);
    assert_eq!(state.history().len(), rolls.len());
}

/// Each roll is attributed to the side whose phase it was.
#[test]
fn test_history_follows_rollers() {
    let mut state = sturdy_match(MatchMode::Local);
    for v in [1, 2, 3, 4, 5, 6, 7, 8] {
        state.submit_roll(die(v), RollOrigin::Local, &mut NullNotifier).unwrap();
    }

    let sides: Vec<Side> = state.history().iter().map(|r| r.side).collect();
    assert_eq!(
        sides,
        vec![Side::P1, Side::P2, Side::P2, Side::P1, Side::P1, Side::P2, Side::P2, Side::P1]
    );
    for record in state.history() {
        assert_eq!(record.phase.roller(), record.side);
    }
}

/// Resolution only happens after defend rolls.
#[test]
fn test_only_defend_rolls_resolve() {
    let mut state = sturdy_match(MatchMode::Local);
    for i in 0..8 {
        let phase = state.phase();
        let mut events = Vec::new();
        let resolution = state.submit_roll(die(5), RollOrigin::Local, &mut events).unwrap();

        assert_eq!(resolution.is_some(), phase.is_defend(), "roll {i} in {phase}");
        assert_eq!(events[0], CombatEvent::DiceRolled { value: die(5) });
        if phase.is_attack() {
            assert_eq!(events.len(), 1);
        }
    }
}

/// Online, host and guest alternate in the same pattern as a local match.
#[test]
fn test_online_turn_ownership() {
    let mut host = sturdy_match(MatchMode::Online { role: Role::Host });
    let mut guest = sturdy_match(MatchMode::Online { role: Role::Guest });

    let expected_host_turns = [true, false, false, true];
    for round in 0..2 {
        for (i, &host_turn) in expected_host_turns.iter().enumerate() {
            assert_eq!(host.can_roll(RollOrigin::Local), host_turn, "round {round} step {i}");
            assert_eq!(guest.can_roll(RollOrigin::Local), !host_turn, "round {round} step {i}");

            let (roller, follower) = if host_turn {
                (&mut host, &mut guest)
            } else {
                (&mut guest, &mut host)
            };
            roller.submit_roll(die(4), RollOrigin::Local, &mut NullNotifier).unwrap();
            follower.submit_roll(die(4), RollOrigin::Remote, &mut NullNotifier).unwrap();
        }
    }
    assert_eq!(host.phase(), guest.phase());
    assert_eq!(host.history(), guest.history());
    for side in Side::ALL {
        assert_eq!(host.health(side), guest.health(side));
    }
}
