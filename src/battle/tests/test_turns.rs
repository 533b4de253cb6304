#[cfg(test)]
mod tests {
    use crate::battle::state::{GameState, Side};
    use crate::battle::tests::common::{create_test_battle, pikachu, squirtle, TestCombatantBuilder};
    use pretty_assertions::assert_eq;
    use schema::ElementType;

    #[test]
    fn test_player_moves_first() {
        let battle = create_test_battle(pikachu(), squirtle());
        assert_eq!(battle.game_state(), GameState::PlayerTurn);
        assert_eq!(battle.active_side(), Some(Side::Player));
        assert!(!battle.is_terminal());
        assert_eq!(battle.winner(), None);
        assert_eq!(battle.last_move(), None);
    }

    #[test]
    fn test_full_exchange_until_faint() {
        let mut battle = create_test_battle(pikachu(), squirtle());

        // Thunder Shock is super effective on water: 40 x 2.
        assert!(!battle.apply_attack(Side::Player, 0));
        assert_eq!(battle.current_hp(Side::Ai), 40);
        assert_eq!(battle.active_side(), Some(Side::Ai));
        assert_eq!(
            battle.last_move_description().as_deref(),
            Some("Pikachu used Thunder Shock (80 damage) It's super effective!")
        );

        // Water Gun is neutral on electric.
        assert!(!battle.apply_attack(Side::Ai, 0));
        assert_eq!(battle.current_hp(Side::Player), 60);
        assert_eq!(battle.active_side(), Some(Side::Player));
        assert_eq!(
            battle.last_move_description().as_deref(),
            Some("Squirtle used Water Gun (40 damage)")
        );

        // The finishing blow overshoots below zero.
        assert!(battle.apply_attack(Side::Player, 0));
        assert_eq!(battle.current_hp(Side::Ai), -40);
        assert_eq!(battle.game_state(), GameState::Terminal { winner: Side::Player });
        assert_eq!(battle.winner(), Some(Side::Player));
        assert_eq!(battle.active_side(), None);
    }

    #[test]
    fn test_terminal_battle_ignores_further_attacks() {
        let weak = TestCombatantBuilder::new("Magikarp")
            .with_types(vec![ElementType::Water])
            .with_hp(10)
            .build();
        let mut battle = create_test_battle(pikachu(), weak);

        assert!(battle.apply_attack(Side::Player, 0));
        let hp_after = battle.current_hp(Side::Player);
        let last = battle.last_move().cloned();

        for side in [Side::Player, Side::Ai] {
            for index in 0..3 {
                assert!(battle.apply_attack(side, index));
            }
        }

        assert_eq!(battle.current_hp(Side::Player), hp_after);
        assert_eq!(battle.winner(), Some(Side::Player));
        assert_eq!(battle.last_move().cloned(), last);
    }

    #[test]
    fn test_out_of_range_index_is_a_no_op() {
        let mut battle = create_test_battle(pikachu(), squirtle());

        assert!(!battle.apply_attack(Side::Player, 2));
        assert!(!battle.apply_attack(Side::Player, usize::MAX));

        assert_eq!(battle.active_side(), Some(Side::Player));
        assert_eq!(battle.current_hp(Side::Ai), 120);
        assert_eq!(battle.last_move(), None);
    }

    #[test]
    fn test_attack_out_of_turn_is_a_no_op() {
        let mut battle = create_test_battle(pikachu(), squirtle());

        assert!(!battle.apply_attack(Side::Ai, 0));

        assert_eq!(battle.active_side(), Some(Side::Player));
        assert_eq!(battle.current_hp(Side::Player), 100);
        assert_eq!(battle.last_move(), None);
    }

    #[test]
    fn test_turns_strictly_alternate() {
        let tank = |name: &str| {
            TestCombatantBuilder::new(name)
                .with_hp(1_000)
                .with_attack("Pound", ElementType::Normal, 10)
                .build()
        };
        let mut battle = create_test_battle(tank("Left"), tank("Right"));

        let mut expected = Side::Player;
        for _ in 0..50 {
            assert_eq!(battle.active_side(), Some(expected));
            assert!(!battle.apply_attack(expected, 0));
            expected = expected.opponent();
        }
        assert_eq!(battle.current_hp(Side::Player), 1_000 - 25 * 10);
        assert_eq!(battle.current_hp(Side::Ai), 1_000 - 25 * 10);
    }

    #[test]
    fn test_zero_damage_still_passes_the_turn() {
        let ghost = TestCombatantBuilder::new("Gastly")
            .with_types(vec![ElementType::Ghost])
            .with_attack("Lick", ElementType::Ghost, 30)
            .build();
        let mut battle = create_test_battle(TestCombatantBuilder::new("Eevee").build(), ghost);

        assert!(!battle.apply_attack(Side::Player, 0));
        assert_eq!(battle.current_hp(Side::Ai), 100);
        assert_eq!(battle.active_side(), Some(Side::Ai));
        assert_eq!(
            battle.last_move_description().as_deref(),
            Some("Eevee used Tackle (0 damage) It had no effect!")
        );
    }

    #[test]
    fn test_damaging_battle_terminates() {
        let mut battle = create_test_battle(pikachu(), squirtle());
        let bound = (battle.max_hp(Side::Player) + battle.max_hp(Side::Ai)) as usize;

        let mut calls = 0;
        while let Some(side) = battle.active_side() {
            battle.apply_attack(side, 1);
            calls += 1;
            assert!(calls <= bound, "battle did not end");
        }

        // Swift (30) vs Tackle (40): Squirtle wins the race.
        assert_eq!(battle.winner(), Some(Side::Ai));
        assert!(battle.current_hp(Side::Player) <= 0);
        assert!(battle.current_hp(Side::Ai) > 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut battle = create_test_battle(pikachu(), squirtle());
        battle.apply_attack(Side::Player, 1);

        let snapshot = battle.snapshot();
        assert_eq!(snapshot.player.name, "Pikachu");
        assert_eq!(snapshot.ai.current_hp, 90);
        assert_eq!(snapshot.ai.max_hp, 120);
        assert_eq!(snapshot.active_side, Some(Side::Ai));
        assert!(!snapshot.terminal);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.last_move.as_deref(), Some("Pikachu used Swift (30 damage)"));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["active_side"], "ai");
        assert_eq!(json["ai"]["types"][0], "water");
    }
}
