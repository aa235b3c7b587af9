//! The game orchestrator.

use im::Vector;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use super::action::{GameEvent, PendingAction};
use crate::cards::{Card, CardKind, CardVariant, Deck, Slot};
use crate::core::{EntityId, GameError, Player, PlayerId, PlayerMap, Result, CODERS_TO_WIN};
use crate::turns::TurnManager;

/// A single match of Sleeping Coders.
///
/// Owns every pile, the sleeping-coder row, the players and the turn order.
/// All calls are synchronous and either complete fully or fail before any
/// state changes; a front-end sharing a game between threads must serialize
/// access itself.
#[derive(Clone, Debug)]
pub struct Game {
    draw_pile: Deck,
    discard_pile: Deck,
    sleeping_coders: Vec<Option<Card>>,
    players: PlayerMap<Player>,
    turns: TurnManager,
    action: PendingAction,
    /// The card whose play set the pending action, and who played it.
    requester: Option<(Card, PlayerId)>,
    last_player: Option<PlayerId>,
    coders_to_win: usize,
    winner: Option<PlayerId>,
    over: bool,
    history: Vector<GameEvent>,
    recent_draws: SmallVec<[EntityId; 1]>,
}

impl Game {
    /// Start a game from a draw pile, the coders that begin asleep (one per
    /// row slot) and the players in seating order.
    pub fn new(draw_pile: Deck, sleeping_coders: Vec<Card>, players: Vec<Player>) -> Result<Self> {
        if players.is_empty() || players.len() > 255 {
            return Err(GameError::InvalidAmount(players.len()));
        }

        let players = PlayerMap::from_vec(players);
        let turns = TurnManager::new(players.player_ids().collect());

        Ok(Self {
            draw_pile,
            discard_pile: Deck::new(),
            sleeping_coders: sleeping_coders.into_iter().map(Some).collect(),
            players,
            turns,
            action: PendingAction::NoAction,
            requester: None,
            last_player: None,
            coders_to_win: CODERS_TO_WIN,
            winner: None,
            over: false,
            history: Vector::new(),
            recent_draws: SmallVec::new(),
        })
    }

    /// Change how many coders a player needs to win.
    #[must_use]
    pub fn with_coders_to_win(mut self, coders_to_win: usize) -> Self {
        self.coders_to_win = coders_to_win;
        self
    }

    // === Piles ===

    #[must_use]
    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Deck {
        &self.discard_pile
    }

    /// The most recently played card.
    pub fn last_played_card(&self) -> Result<&Card> {
        self.discard_pile.top()
    }

    /// Who made the most recent play, if anyone has. This is not
    /// necessarily the player a pending action resolves for.
    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }

    /// Remove and return the first card from the top of the draw pile whose
    /// variant is not `blocked`. Blocked cards above it are consumed.
    ///
    /// Fails without consuming anything if no acceptable card is left.
    pub fn pick_card(&mut self, blocked: &[CardVariant]) -> Result<Card> {
        let cards = self.draw_pile.cards();
        let index = cards
            .iter()
            .rposition(|card| !blocked.contains(&card.variant()))
            .ok_or(GameError::EmptyCollection { needed: 1, available: 0 })?;

        let skipped = cards.len() - index - 1;
        if skipped > 0 {
            warn!("skipped {skipped} blocked cards while picking");
        }

        let mut taken = self.draw_pile.draw(skipped + 1)?;
        taken
            .pop()
            .ok_or(GameError::EmptyCollection { needed: 1, available: 0 })
    }

    // === Sleeping coders ===

    /// The whole row; `None` marks an empty slot.
    #[must_use]
    pub fn sleeping_coders(&self) -> &[Option<Card>] {
        &self.sleeping_coders
    }

    /// The coder asleep at `slot`, if any.
    pub fn sleeping_coder(&self, slot: usize) -> Result<Option<&Card>> {
        GameError::check_index(slot, self.sleeping_coders.len())?;
        Ok(self.sleeping_coders[slot].as_ref())
    }

    /// Put `card` (or nothing) in `slot`, returning what was there.
    pub fn set_sleeping_coder(&mut self, slot: usize, card: Option<Card>) -> Result<Option<Card>> {
        GameError::check_index(slot, self.sleeping_coders.len())?;
        Ok(std::mem::replace(&mut self.sleeping_coders[slot], card))
    }

    // === Players and turns ===

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players.get_mut(id).ok_or(GameError::UnknownPlayer(id))
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    /// Pass the turn to the next player.
    pub fn next_player(&mut self) -> PlayerId {
        let next = self.turns.next();
        debug!("turn passes to {next}");
        next
    }

    /// Advance the turn once more.
    ///
    /// Called after a play has already passed the turn, this makes the
    /// player who would have gone next miss their go.
    pub fn skip(&mut self) -> PlayerId {
        let next = self.turns.skip(0);
        debug!("turn skips to {next}");
        next
    }

    /// Reverse the direction of play.
    pub fn reverse(&mut self) {
        self.turns.reverse();
        debug!("turn order reversed");
    }

    // === Actions ===

    #[must_use]
    pub fn action(&self) -> PendingAction {
        self.action
    }

    pub fn set_action(&mut self, action: PendingAction) {
        self.action = action;
    }

    /// `player` plays `card`: the card's own effect runs, then the card goes
    /// onto the discard pile.
    pub fn select_card(&mut self, player: PlayerId, card: Card) -> Result<()> {
        self.recent_draws.clear();
        card.play(player, self)?;

        let drawn = std::mem::take(&mut self.recent_draws);
        self.history.push_back(GameEvent::Played {
            player,
            card: card.clone(),
            drawn,
        });
        match card.kind() {
            // Coder plays leave the pending action alone
            CardKind::Coder(_) => {}
            _ => {
                self.requester = card
                    .requested_action()
                    .is_pending()
                    .then(|| (card.clone(), player));
            }
        }
        self.discard_pile.add_one(card);
        self.last_player = Some(player);
        Ok(())
    }

    /// Resolve the pending action against `slot`, on behalf of whoever
    /// played the card that requested it.
    ///
    /// Coder cards played in between do not disturb the request. Fails with
    /// [`GameError::NoPendingAction`] when nothing is pending or no played
    /// card requested the pending action.
    pub fn resolve_pending_action(&mut self, slot: Slot) -> Result<()> {
        let action = self.action;
        if !action.is_pending() {
            return Err(GameError::NoPendingAction);
        }

        let (card, player) = match &self.requester {
            Some((card, player)) if card.requested_action() == action => (card.clone(), *player),
            _ => return Err(GameError::NoPendingAction),
        };

        card.action(player, self, slot)?;
        self.requester = None;
        self.history.push_back(GameEvent::Resolved { player, action, slot });
        Ok(())
    }

    // === Game end ===

    /// Number of coders a player needs to win.
    #[must_use]
    pub fn coders_to_win(&self) -> usize {
        self.coders_to_win
    }

    /// Check whether the game has ended, recording the winner if a player
    /// has collected enough coders.
    ///
    /// The game ends when the draw pile is empty (no winner) or when the
    /// first player in seating order holds enough coders. Once a winner is
    /// recorded, the game stays over.
    pub fn is_over(&mut self) -> bool {
        if self.over {
            return true;
        }
        if self.draw_pile.is_empty() {
            debug!("draw pile exhausted");
            return true;
        }

        let threshold = self.coders_to_win;
        let winner = self
            .players
            .iter()
            .find(|(_, player)| player.has_collected(threshold))
            .map(|(id, _)| id);

        if let Some(player) = winner {
            debug!("{player} wins with {threshold} coders");
            self.winner = Some(player);
            self.over = true;
            self.history.push_back(GameEvent::Won { player });
        }
        self.over
    }

    /// The recorded winner, once [`Game::is_over`] has found one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Everything played and resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Move the top of the draw pile into `player`'s hand.
    pub(crate) fn draw_into_hand(&mut self, player: PlayerId) -> Result<()> {
        self.player(player)?;
        let drawn = self.draw_pile.draw(1)?;

        self.recent_draws.extend(drawn.iter().map(Card::id));
        for card in &drawn {
            trace!("{player} draws {card}");
        }
        self.player_mut(player)?.hand_mut().add_many(drawn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<Player> {
        (1..=n).map(|i| Player::new(format!("Player {i}"))).collect()
    }

    fn game_with_pile(pile: Vec<Card>) -> Game {
        let coders = (0..4).map(|i| Card::coder(format!("coder {i}"))).collect();
        Game::new(Deck::from(pile), coders, players(3)).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let result = Game::new(Deck::new(), vec![], vec![]);
        assert_eq!(result.err(), Some(GameError::InvalidAmount(0)));
    }

    #[test]
    fn test_initial_state() {
        let game = game_with_pile(vec![Card::plain()]);

        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.action(), PendingAction::NoAction);
        assert_eq!(game.sleeping_coders().len(), 4);
        assert!(game.sleeping_coders().iter().all(Option::is_some));
        assert!(game.discard_pile().is_empty());
        assert!(game.last_played_card().is_err());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_set_sleeping_coder() {
        let mut game = game_with_pile(vec![]);
        let coder = game.sleeping_coder(2).unwrap().cloned();

        let previous = game.set_sleeping_coder(2, None).unwrap();
        assert_eq!(previous, coder);
        assert_eq!(game.sleeping_coder(2).unwrap(), None);
        assert_eq!(
            game.set_sleeping_coder(4, None),
            Err(GameError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_pick_card_skips_blocked() {
        let (a, b, c) = (Card::plain(), Card::number(1), Card::tutor("brae"));
        let mut game = game_with_pile(vec![a.clone(), b, c]);

        let picked = game
            .pick_card(&[CardVariant::Number, CardVariant::Tutor])
            .unwrap();
        assert_eq!(picked, a);
        assert!(game.draw_pile().is_empty());
    }

    #[test]
    fn test_pick_card_without_match_consumes_nothing() {
        let mut game = game_with_pile(vec![Card::number(1), Card::number(2)]);

        assert!(game.pick_card(&[CardVariant::Number]).is_err());
        assert_eq!(game.draw_pile().size(), 2);
    }

    #[test]
    fn test_turn_delegation() {
        let mut game = game_with_pile(vec![]);

        assert_eq!(game.next_player(), PlayerId::new(1));
        assert_eq!(game.current_player(), PlayerId::new(1));
        game.reverse();
        assert_eq!(game.next_player(), PlayerId::new(0));
        assert_eq!(game.skip(), PlayerId::new(2));
        assert!(!game.turns().is_forward());
    }

    #[test]
    fn test_skip_advances_one_seat() {
        let mut game = game_with_pile(vec![]);

        assert_eq!(game.skip(), PlayerId::new(1));
        assert_eq!(game.skip(), PlayerId::new(2));
        assert_eq!(game.skip(), PlayerId::new(0));
    }

    #[test]
    fn test_set_action() {
        let mut game = game_with_pile(vec![]);
        game.set_action(PendingAction::SleepCoder);
        assert_eq!(game.action(), PendingAction::SleepCoder);
    }

    #[test]
    fn test_resolve_without_pending_action() {
        let mut game = game_with_pile(vec![Card::plain()]);
        assert_eq!(
            game.resolve_pending_action(Slot::Row(0)),
            Err(GameError::NoPendingAction)
        );
    }

    #[test]
    fn test_unknown_player() {
        let game = game_with_pile(vec![]);
        assert_eq!(
            game.player(PlayerId::new(3)).err(),
            Some(GameError::UnknownPlayer(PlayerId::new(3)))
        );
    }

    #[test]
    fn test_is_over_when_draw_pile_empty() {
        let mut game = game_with_pile(vec![]);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
    }
}
