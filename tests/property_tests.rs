//! Property tests over random action sequences.

use proptest::prelude::*;

use plus_slash::core::{Action, BlockAction, GameState, KeepSymbol, Phase, CELL_COUNT};
use plus_slash::rules::{apply_action, is_valid_move, legal_actions, legal_moves};

fn action_strategy() -> impl Strategy<Value = Action> {
    let index = 0..CELL_COUNT + 1;
    prop_oneof![
        4 => index.clone().prop_map(|index| Action::Move { index }),
        1 => (index.clone(), prop::bool::ANY).prop_map(|(index, place)| Action::Block {
            index,
            kind: if place { BlockAction::Place } else { BlockAction::Neutralize },
        }),
        1 => (index, 0..3u8).prop_map(|(index, keep)| Action::Remove {
            index,
            keep: match keep {
                0 => None,
                1 => Some(KeepSymbol::KeepVertical),
                _ => Some(KeepSymbol::KeepHorizontal),
            },
        }),
    ]
}

/// Every state reached by applying the accepted actions in order.
fn play_out(actions: &[Action]) -> Vec<(GameState, Action, GameState)> {
    let mut state = GameState::new();
    let mut steps = Vec::new();
    for action in actions {
        if let Ok(next) = apply_action(&state, action) {
            steps.push((state, *action, next));
            state = next;
        }
    }
    steps
}

proptest! {
    #[test]
    fn prop_transitions_are_deterministic(actions in prop::collection::vec(action_strategy(), 0..60)) {
        for (before, action, after) in play_out(&actions) {
            prop_assert_eq!(apply_action(&before, &action), Ok(after));
        }
    }

    #[test]
    fn prop_validation_is_pure(actions in prop::collection::vec(action_strategy(), 0..60)) {
        for (_, _, state) in play_out(&actions) {
            let copy = state;
            for index in 0..CELL_COUNT {
                let first = is_valid_move(&state, index, state.current_player);
                prop_assert_eq!(first, is_valid_move(&state, index, state.current_player));
            }
            prop_assert_eq!(state, copy);
        }
    }

    #[test]
    fn prop_phase_never_reverts(actions in prop::collection::vec(action_strategy(), 0..80)) {
        for (before, _, after) in play_out(&actions) {
            if before.phase == Phase::Battle {
                prop_assert_eq!(after.phase, Phase::Battle);
            }
        }
    }

    #[test]
    fn prop_decided_state_is_final(actions in prop::collection::vec(action_strategy(), 0..80)) {
        let steps = play_out(&actions);
        if let Some((_, _, last)) = steps.last() {
            if last.is_decided() {
                prop_assert!(legal_moves(last).is_empty());
                prop_assert!(legal_actions(last).is_empty());
            }
        }
        for (before, _, _) in &steps {
            prop_assert!(!before.is_decided());
        }
    }

    #[test]
    fn prop_remove_keeps_turn_and_ko(actions in prop::collection::vec(action_strategy(), 0..60)) {
        for (before, action, after) in play_out(&actions) {
            if matches!(action, Action::Remove { .. }) {
                prop_assert_eq!(after.current_player, before.current_player);
                prop_assert_eq!(after.last_move_index, before.last_move_index);
            } else if !after.is_decided() {
                prop_assert_eq!(after.current_player, before.current_player.opponent());
                prop_assert_eq!(after.last_move_index, Some(action.index()));
            }
        }
    }

    #[test]
    fn prop_ability_flags_set_once(actions in prop::collection::vec(action_strategy(), 0..60)) {
        for (before, action, after) in play_out(&actions) {
            for (player, used) in before.abilities.iter() {
                let now = after.abilities[player];
                prop_assert!(!used.block_used || now.block_used);
                prop_assert!(!used.remove_used || now.remove_used);
            }
            if let Action::Block { .. } = action {
                prop_assert!(!before.current_abilities().block_used);
                prop_assert!(after.abilities[before.current_player].block_used);
            }
        }
    }

    #[test]
    fn prop_legal_moves_are_accepted(actions in prop::collection::vec(action_strategy(), 0..60)) {
        for (_, _, state) in play_out(&actions) {
            for index in legal_moves(&state) {
                let action = Action::Move { index };
                prop_assert!(apply_action(&state, &action).is_ok());
            }
        }
    }
}
