//! Property tests for decks, turn order and plays.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use sleeping_coders::{
    Card, Deck, EntityId, Game, GameRng, PendingAction, Player, PlayerId, TurnManager,
};

fn deck_of(len: usize) -> Deck {
    (0..len).map(|i| Card::number(i as u32)).collect()
}

fn ids(deck: &Deck) -> Vec<EntityId> {
    deck.iter().map(Card::id).collect()
}

proptest! {
    #[test]
    fn draw_then_add_restores_deck(len in 1usize..40) {
        let mut deck = deck_of(len);
        let original = deck.clone();

        let mut drawn = deck.draw(1).unwrap();
        deck.add_one(drawn.remove(0));

        prop_assert_eq!(deck, original);
    }

    #[test]
    fn shuffle_is_a_permutation(len in 0usize..60, seed in any::<u64>()) {
        let mut deck = deck_of(len);
        let before: FxHashSet<_> = ids(&deck).into_iter().collect();

        deck.shuffle(&mut GameRng::new(seed));

        let after: FxHashSet<_> = ids(&deck).into_iter().collect();
        prop_assert_eq!(deck.size(), len);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn draw_returns_top_first(len in 1usize..40, amount in 1usize..40) {
        let mut deck = deck_of(len);
        let original = deck.cards().to_vec();

        match deck.draw(amount) {
            Ok(drawn) => {
                prop_assert!(amount <= len);
                let mut expected = original[len - amount..].to_vec();
                expected.reverse();
                prop_assert_eq!(drawn, expected);
                prop_assert_eq!(deck.cards(), &original[..len - amount]);
            }
            Err(_) => {
                prop_assert!(amount > len);
                prop_assert_eq!(deck.cards(), original.as_slice());
            }
        }
    }

    #[test]
    fn peek_is_pure(players in 1usize..9, moves in 0usize..20, k in -20isize..20) {
        let mut turns = TurnManager::new(PlayerId::all(players).collect());
        for _ in 0..moves {
            turns.next();
        }
        let snapshot = turns.clone();

        let ahead = turns.peek(k);
        let behind = turns.peek(-k);
        prop_assert_eq!(turns.peek(-k), behind);
        prop_assert_eq!(turns.peek(k), ahead);
        prop_assert_eq!(&turns, &snapshot);

        let n = players as isize;
        let expected = (turns.location() as isize + k).rem_euclid(n) as u8;
        prop_assert_eq!(ahead, PlayerId::new(expected));
    }

    #[test]
    fn full_cycle_returns_to_start(players in 1usize..9, rounds in 0usize..30) {
        let mut turns = TurnManager::new(PlayerId::all(players).collect());
        let start = turns.current();

        for _ in 0..rounds {
            turns.next();
        }

        prop_assert_eq!(turns.current() == start, rounds % players == 0);
    }

    #[test]
    fn plain_plays_keep_hand_size(pile in 1usize..30, hand in 1usize..6) {
        let mut draw_pile = deck_of(pile + hand);
        let mut player = Player::new("one");
        player.hand_mut().add_many(draw_pile.draw(hand).unwrap());
        let mut game = Game::new(draw_pile, vec![], vec![player, Player::new("two")]).unwrap();
        let me = PlayerId::new(0);

        let card = game.player(me).unwrap().hand().card_at(0).unwrap().clone();
        game.select_card(me, card).unwrap();

        prop_assert_eq!(game.player(me).unwrap().hand().size(), hand);
        prop_assert_eq!(game.draw_pile().size(), pile - 1);
        prop_assert_eq!(game.current_player(), PlayerId::new(1));
        prop_assert_eq!(game.action(), PendingAction::NoAction);
    }
}
