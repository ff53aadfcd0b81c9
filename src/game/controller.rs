//! Intent handling.
//!
//! The controller is the only code that moves cards during play. Each
//! intent resolves the card's current container, asks the rule set, and
//! only then mutates; a refused intent leaves every container untouched.
//! Successful intents return a [`MoveOutcome`], clear the selection,
//! refresh the `completed` flag and notify event subscribers.
//!
//! ## Selection
//!
//! ```text
//! Idle --click card--> CardSelected | StackSelected
//! selected --click same card--> Idle
//! selected --click other card--> move onto its container
//!                                  ok: Idle
//!                                  refused: select the clicked card
//! selected --click slot--> move there (ok: Idle, refused: unchanged)
//! selected --click outside--> Idle
//! ```

use log::{debug, trace, warn};

use crate::core::{Card, Observable, SubscriptionId};
use crate::game::{Game, GameEvent, MoveError};
use crate::zones::{CardStack, SlotId};

/// What the player currently has picked up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// A single card.
    Card { card: Card, source: SlotId },
    /// A movable run from a column, head first.
    Stack { cards: CardStack, source: SlotId },
}

impl Selection {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The selected card, or the head of the selected run.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Selection::Idle => None,
            Selection::Card { card, .. } => Some(card),
            Selection::Stack { cards, .. } => cards.first(),
        }
    }

    #[must_use]
    pub fn stack(&self) -> Option<&[Card]> {
        match self {
            Selection::Stack { cards, .. } => Some(cards.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<SlotId> {
        match self {
            Selection::Idle => None,
            Selection::Card { source, .. } | Selection::Stack { source, .. } => Some(*source),
        }
    }
}

/// Result of a committed intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub event: GameEvent,
    /// Whether the game is won after this change.
    pub completed: bool,
}

/// Resolved plan for a single-card move, computed before any mutation.
enum Plan {
    Single { source: SlotId, destination: SlotId },
    Stack { column: usize, from: usize },
}

/// Drives a [`Game`] from player intents.
#[derive(Debug)]
pub struct Controller {
    game: Game,
    selection: Observable<Selection>,
    clicks: Observable<u32>,
    completed: Observable<bool>,
    events: Observable<Option<GameEvent>>,
}

impl Controller {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let completed = game.is_game_completed();
        Self {
            game,
            selection: Observable::new(Selection::Idle),
            clicks: Observable::new(0),
            completed: Observable::new(completed),
            events: Observable::new(None),
        }
    }

    // === State and subscriptions ===

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access to the game, for attaching container subscribers.
    /// Cards moved through it bypass the rules.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.selection.get()
    }

    pub fn subscribe_selection(
        &mut self,
        callback: impl FnMut(&Selection) + 'static,
    ) -> SubscriptionId {
        self.selection.subscribe(callback)
    }

    /// Number of click intents received.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        *self.clicks.get()
    }

    pub fn subscribe_clicks(&mut self, callback: impl FnMut(&u32) + 'static) -> SubscriptionId {
        self.clicks.subscribe(callback)
    }

    /// Last published completion state.
    #[must_use]
    pub fn completed(&self) -> bool {
        *self.completed.get()
    }

    /// Called once when the game flips to won (or back).
    pub fn subscribe_completed(&mut self, callback: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.completed.subscribe(callback)
    }

    /// Called with every committed event.
    pub fn subscribe_events(&mut self, mut callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(move |last| {
            if let Some(event) = last {
                callback(event);
            }
        })
    }

    pub fn unsubscribe_events(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // === Queries ===

    #[must_use]
    pub fn is_game_completed(&self) -> bool {
        self.game.is_game_completed()
    }

    /// Every target `card` could move to right now.
    #[must_use]
    pub fn available_moves(&self, card: &Card) -> Vec<SlotId> {
        self.game.rules().available_moves(card, &self.game.slots())
    }

    #[must_use]
    pub fn can_move_stack(&self, column: usize, from: usize) -> bool {
        self.game
            .column(column)
            .is_some_and(|c| c.can_move_stack(from))
    }

    #[must_use]
    pub fn movable_stack(&self, column: usize, from: usize) -> CardStack {
        self.game
            .column(column)
            .map(|c| c.movable_stack(from))
            .unwrap_or_default()
    }

    /// Whether `card` may be selected or dragged where it is.
    #[must_use]
    pub fn can_interact(&self, card: &Card) -> bool {
        let slots = self.game.slots();
        match (slots.locate(card), slots.find_card(card)) {
            (Some(source), Some(stored)) => {
                stored.is_visible() && self.game.rules().can_interact(&slots, source, card)
            }
            _ => false,
        }
    }

    // === Selection ===

    /// Select `card` from `source`. Selecting the selected card again
    /// clears the selection.
    pub fn select_card(&mut self, card: Card, source: SlotId) -> Result<(), MoveError> {
        let located = self.locate(&card)?;
        if located != source {
            return Err(MoveError::NotInSource { card, source });
        }
        if self.selection.get().card() == Some(&card) {
            self.clear_selection();
            return Ok(());
        }
        self.select(card, source)
    }

    pub fn clear_selection(&mut self) {
        self.selection.set(Selection::Idle);
    }

    fn select(&mut self, card: Card, source: SlotId) -> Result<(), MoveError> {
        let next = {
            let slots = self.game.slots();
            let rules = self.game.rules();
            let visible = slots.find_card(&card).is_some_and(|c| c.is_visible());

            match source {
                SlotId::Column(i) if visible => {
                    let column = slots.columns.get(i).ok_or(MoveError::UnknownSlot(source))?;
                    let index = column.index_of(&card).ok_or(MoveError::SourceNotFound(card))?;
                    if index + 1 < column.card_count() && rules.can_interact_with_stack(column, &card) {
                        Some(Selection::Stack {
                            cards: column.movable_stack(index),
                            source,
                        })
                    } else if rules.can_interact_with_card(column, &card) {
                        Some(Selection::Card { card, source })
                    } else {
                        None
                    }
                }
                _ if visible && rules.can_interact(&slots, source, &card) => {
                    Some(Selection::Card { card, source })
                }
                _ => None,
            }
        };

        match next {
            Some(selection) => {
                trace!("selected {selection:?}");
                self.selection.set(selection);
                Ok(())
            }
            None => {
                self.clear_selection();
                Err(MoveError::NotInteractable(card))
            }
        }
    }

    // === Moves ===

    /// Move `card` from wherever it is to `target`.
    ///
    /// A column card with cards above it moves together with them when
    /// they form a movable run.
    pub fn move_card(&mut self, card: Card, target: SlotId) -> Result<MoveOutcome, MoveError> {
        match self.plan_move(card, target)? {
            Plan::Stack { column, from } => self.move_stack(column, from, target),
            Plan::Single { source, destination } => {
                if !self.game.can_place(destination) {
                    return Err(MoveError::Rejected { card, target });
                }
                let Some(taken) = self.game.take_card(source, &card) else {
                    warn!("{card} vanished from {source} between check and commit");
                    return Err(MoveError::SourceNotFound(card));
                };
                if !self.game.place_card(destination, taken) {
                    warn!("{destination} refused {card} after taking it from {source}");
                    return Err(MoveError::SourceNotFound(card));
                }

                let event = if destination == SlotId::Deck {
                    GameEvent::ReturnedToDeck { card, from: source }
                } else {
                    GameEvent::Moved {
                        card,
                        from: source,
                        to: destination,
                    }
                };
                Ok(self.commit(event))
            }
        }
    }

    /// Validate a single-card move and pick its concrete destination.
    fn plan_move(&self, card: Card, target: SlotId) -> Result<Plan, MoveError> {
        let source = self.locate(&card)?;
        let slots = self.game.slots();
        let rules = self.game.rules();

        let stored = slots.find_card(&card).ok_or(MoveError::SourceNotFound(card))?;
        if source == SlotId::Deck || !stored.is_visible() {
            return Err(MoveError::NotInteractable(card));
        }
        if !matches!(source, SlotId::Column(_)) && !rules.can_interact(&slots, source, &card) {
            return Err(MoveError::NotInteractable(card));
        }

        let target_ref = slots.resolve(target).ok_or(MoveError::UnknownSlot(target))?;
        if target == SlotId::Deck && !rules.can_return_card_to_deck() {
            return Err(MoveError::ReturnToDeckForbidden);
        }
        if !rules.can_move_card(target_ref, &card) {
            return Err(MoveError::Rejected { card, target });
        }

        if let SlotId::Column(i) = source {
            let column = slots.columns.get(i).ok_or(MoveError::SourceNotFound(card))?;
            let index = column.index_of(&card).ok_or(MoveError::SourceNotFound(card))?;
            if index + 1 < column.card_count() {
                return if column.can_move_stack(index) {
                    Ok(Plan::Stack { column: i, from: index })
                } else {
                    Err(MoveError::StackNotMovable(card))
                };
            }
        }

        let destination = match target {
            SlotId::TempBucket => SlotId::TempSlot(
                slots
                    .temp
                    .first_empty_slot()
                    .ok_or(MoveError::NoEmptyTempSlot)?,
            ),
            other => other,
        };
        Ok(Plan::Single { source, destination })
    }

    /// Move `card` from the named `source` to `target`. Clears the
    /// selection first.
    pub fn move_card_to_slot(
        &mut self,
        card: Card,
        source: SlotId,
        target: SlotId,
    ) -> Result<MoveOutcome, MoveError> {
        self.clear_selection();
        let located = self.locate(&card)?;
        if located != source {
            return Err(MoveError::NotInSource { card, source });
        }
        self.move_card(card, target)
    }

    /// Move the run starting at `from` in column `column` onto `target`.
    ///
    /// Runs of more than one card may only go to another column.
    pub fn move_stack(
        &mut self,
        column: usize,
        from: usize,
        target: SlotId,
    ) -> Result<MoveOutcome, MoveError> {
        let source = SlotId::Column(column);
        let (head, stack) = {
            let col = self.game.column(column).ok_or(MoveError::UnknownSlot(source))?;
            let head = *col.cards().get(from).ok_or(MoveError::UnknownSlot(source))?;
            if !head.is_visible() {
                return Err(MoveError::NotInteractable(head));
            }
            if !col.can_move_stack(from) {
                return Err(MoveError::StackNotMovable(head));
            }
            (head, col.movable_stack(from))
        };

        if stack.len() == 1 {
            return self.move_card(head, target);
        }
        if !matches!(target, SlotId::Column(_)) {
            return Err(MoveError::StackToNonColumn(target));
        }
        {
            let slots = self.game.slots();
            let target_ref = slots.resolve(target).ok_or(MoveError::UnknownSlot(target))?;
            if target == source || !self.game.rules().can_move_card_group(&stack, target_ref) {
                return Err(MoveError::Rejected { card: head, target });
            }
        }

        let SlotId::Column(to) = target else {
            return Err(MoveError::StackToNonColumn(target));
        };
        let lifted = self.game.take_stack(column, from);
        if lifted != stack {
            warn!("column {column} changed between check and commit");
            return Err(MoveError::StackNotMovable(head));
        }
        match self.game.column_mut(to) {
            Some(dest) => dest.add_stack(&lifted),
            None => return Err(MoveError::UnknownSlot(target)),
        }

        Ok(self.commit(GameEvent::StackMoved {
            cards: lifted,
            from: source,
            to: target,
        }))
    }

    /// Move a run identified by its cards. The cards must be exactly the
    /// suffix of `source` starting at the first one.
    pub fn move_stack_to_slot(
        &mut self,
        cards: &[Card],
        source: SlotId,
        target: SlotId,
    ) -> Result<MoveOutcome, MoveError> {
        self.clear_selection();
        let Some(&head) = cards.first() else {
            return Err(MoveError::NothingSelected);
        };
        let SlotId::Column(column) = source else {
            return Err(MoveError::StackNotMovable(head));
        };
        let col = self.game.column(column).ok_or(MoveError::UnknownSlot(source))?;
        let from = col
            .index_of(&head)
            .ok_or(MoveError::NotInSource { card: head, source })?;
        if col.cards()[from..] != *cards {
            return Err(MoveError::StackNotMovable(head));
        }
        self.move_stack(column, from, target)
    }

    // === Deck ===

    /// Turn the top of the deck onto the drawn-cards area.
    pub fn draw_card_from_deck(&mut self) -> Result<MoveOutcome, MoveError> {
        if !self.game.rules().has_drawn_cards_area() {
            return Err(MoveError::NoDrawnCardsArea);
        }
        if !self.game.rules().can_draw_from_deck(self.game.deck()) {
            return Err(MoveError::DeckEmpty);
        }
        let mut card = self.game.deck_mut().draw_card().ok_or(MoveError::DeckEmpty)?;
        card.set_visible(true);
        if !self.game.place_card(SlotId::DrawnCards, card) {
            self.game.deck_mut().add_card(card);
            return Err(MoveError::NoDrawnCardsArea);
        }
        Ok(self.commit(GameEvent::Drawn(card)))
    }

    /// Put every drawn card back into the empty deck.
    pub fn restart_deck(&mut self) -> Result<MoveOutcome, MoveError> {
        let drawn = self.game.drawn().ok_or(MoveError::NoDrawnCardsArea)?;
        if drawn.is_empty() {
            return Err(MoveError::NothingToRestart);
        }
        if !self.game.deck().is_empty() {
            return Err(MoveError::DeckNotEmpty);
        }
        let returned = self.game.recycle_drawn_cards();
        Ok(self.commit(GameEvent::DeckRestarted { returned }))
    }

    /// Send `card` back into the deck, where the variant allows it.
    pub fn return_card_to_deck(&mut self, card: Card) -> Result<MoveOutcome, MoveError> {
        if !self.game.rules().can_return_card_to_deck() {
            return Err(MoveError::ReturnToDeckForbidden);
        }
        self.move_card(card, SlotId::Deck)
    }

    /// Play the top of the deck directly onto `target`.
    ///
    /// Only for variants without a drawn-cards area; the deck is untouched
    /// unless the rules accept the card there.
    pub fn move_card_from_deck_to_slot(&mut self, target: SlotId) -> Result<MoveOutcome, MoveError> {
        let (card, destination) = {
            let slots = self.game.slots();
            let rules = self.game.rules();
            if !rules.can_draw_from_deck(slots.deck) {
                return Err(MoveError::DeckEmpty);
            }
            let mut card = *slots.deck.top_card().ok_or(MoveError::DeckEmpty)?;
            if rules.has_drawn_cards_area() {
                return Err(MoveError::NotInteractable(card));
            }
            card.set_visible(true);

            let target_ref = slots.resolve(target).ok_or(MoveError::UnknownSlot(target))?;
            if target == SlotId::Deck || !rules.can_move_card(target_ref, &card) {
                return Err(MoveError::Rejected { card, target });
            }
            let destination = match target {
                SlotId::TempBucket => SlotId::TempSlot(
                    slots
                        .temp
                        .first_empty_slot()
                        .ok_or(MoveError::NoEmptyTempSlot)?,
                ),
                other => other,
            };
            (card, destination)
        };

        let Some(drawn) = self.game.deck_mut().draw_card() else {
            return Err(MoveError::DeckEmpty);
        };
        if !self.game.place_card(destination, drawn) {
            warn!("{destination} refused {card} after the rules accepted it");
            self.game.deck_mut().add_card(drawn);
            return Err(MoveError::Rejected { card, target });
        }
        Ok(self.commit(GameEvent::MovedFromDeck {
            card,
            to: destination,
        }))
    }

    pub fn shuffle_deck(&mut self) -> MoveOutcome {
        self.game.shuffle_deck();
        self.commit(GameEvent::DeckShuffled)
    }

    // === Clicks ===

    /// Click on a card: select it, deselect it, or move the selection onto
    /// its container.
    pub fn click_card(&mut self, card: Card) -> Option<MoveOutcome> {
        self.count_click();
        let source = self.locate(&card).ok()?;

        let Some(&selected) = self.selection.get().card() else {
            self.select(card, source).ok();
            return None;
        };
        if selected == card {
            self.clear_selection();
            return None;
        }

        if !matches!(source, SlotId::Deck | SlotId::DrawnCards) {
            match self.move_card(selected, source) {
                Ok(outcome) => return Some(outcome),
                Err(err) => trace!("implicit move of {selected} refused: {err}"),
            }
        }
        self.select(card, source).ok();
        None
    }

    /// Click on a container: move the selection there.
    pub fn click_slot(&mut self, target: SlotId) -> Option<MoveOutcome> {
        self.count_click();
        let selected = *self.selection.get().card()?;
        match self.move_card(selected, target) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                trace!("move of {selected} to {target} refused: {err}");
                None
            }
        }
    }

    /// Click on the deck.
    ///
    /// With a selection, return it to the deck if the variant allows
    /// (the selection is cleared either way). Otherwise draw, restarting
    /// the deck once it is empty.
    pub fn click_deck(&mut self) -> Option<MoveOutcome> {
        self.count_click();
        if let Some(&selected) = self.selection.get().card() {
            let result = self.return_card_to_deck(selected);
            self.clear_selection();
            return result.ok();
        }
        match self.draw_card_from_deck() {
            Ok(outcome) => Some(outcome),
            Err(MoveError::DeckEmpty) => self.restart_deck().ok(),
            Err(_) => None,
        }
    }

    pub fn click_outside(&mut self) {
        self.count_click();
        self.clear_selection();
    }

    /// Drop a dragged card (and anything riding on it) onto `target`.
    pub fn drop_on(&mut self, card: Card, target: SlotId) -> Result<MoveOutcome, MoveError> {
        self.move_card(card, target)
    }

    // === Internals ===

    fn count_click(&mut self) {
        self.clicks.update(|n| *n += 1);
    }

    fn locate(&self, card: &Card) -> Result<SlotId, MoveError> {
        self.game.locate(card).ok_or_else(|| {
            warn!("{card} is not in any container");
            MoveError::SourceNotFound(*card)
        })
    }

    fn commit(&mut self, event: GameEvent) -> MoveOutcome {
        debug!("{event:?}");
        self.selection.set(Selection::Idle);
        let completed = self.game.is_game_completed();
        self.completed.set(completed);
        if completed {
            debug!("game completed");
        }
        self.events.update(|last| *last = Some(event.clone()));
        MoveOutcome { event, completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Rank, Suit, Variant};
    use crate::game::Layout;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn controller(variant: Variant, layout: Layout) -> Controller {
        let config = GameConfig::new(variant).with_reshuffle_on_restart(false);
        Controller::new(Game::from_layout(config, layout).unwrap())
    }

    #[test]
    fn test_move_onto_column() {
        let six = card(Rank::Six, Suit::Spades);
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([six]).with_column([five]),
        );

        let outcome = ctl.move_card(five, SlotId::Column(0)).unwrap();

        assert_eq!(
            outcome.event,
            GameEvent::Moved { card: five, from: SlotId::Column(1), to: SlotId::Column(0) }
        );
        assert_eq!(ctl.game().columns()[0].cards(), &[six, five]);
        assert!(ctl.game().columns()[1].is_empty());
        ctl.game().audit().unwrap();
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let six = card(Rank::Six, Suit::Spades);
        let five = card(Rank::Five, Suit::Clubs);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([six]).with_column([five]),
        );

        let err = ctl.move_card(five, SlotId::Column(0)).unwrap_err();

        assert_eq!(err, MoveError::Rejected { card: five, target: SlotId::Column(0) });
        assert_eq!(ctl.game().columns()[0].cards(), &[six]);
        assert_eq!(ctl.game().columns()[1].cards(), &[five]);
    }

    #[test]
    fn test_temp_bucket_uses_first_empty_slot() {
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new()
                .with_column([five])
                .with_temp_card(0, card(Rank::King, Suit::Clubs)),
        );

        let outcome = ctl.move_card(five, SlotId::TempBucket).unwrap();
        assert_eq!(outcome.event.destination(), Some(SlotId::TempSlot(1)));
        assert_eq!(ctl.game().locate(&five), Some(SlotId::TempSlot(1)));
    }

    #[test]
    fn test_full_temp_bucket_rejects() {
        let five = card(Rank::Five, Suit::Hearts);
        let config = GameConfig::new(Variant::Classic).with_temp_slots(1);
        let layout = Layout::new()
            .with_column([five])
            .with_temp_card(0, card(Rank::King, Suit::Clubs));
        let mut ctl = Controller::new(Game::from_layout(config, layout).unwrap());

        assert!(ctl.move_card(five, SlotId::TempBucket).is_err());
        assert_eq!(ctl.game().locate(&five), Some(SlotId::Column(0)));
    }

    #[test]
    fn test_buried_card_moves_with_run() {
        let eight = card(Rank::Eight, Suit::Spades);
        let seven = card(Rank::Seven, Suit::Hearts);
        let six = card(Rank::Six, Suit::Clubs);
        let nine = card(Rank::Nine, Suit::Diamonds);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([seven, six]).with_column([nine]).with_column([eight]),
        );

        // Seven is buried under a valid run, so it drags the six along
        let outcome = ctl.move_card(seven, SlotId::Column(2)).unwrap();

        assert!(matches!(outcome.event, GameEvent::StackMoved { .. }));
        assert_eq!(outcome.event.card_count(), 2);
        assert_eq!(ctl.game().columns()[2].cards(), &[eight, seven, six]);
        assert!(ctl.game().columns()[0].is_empty());
    }

    #[test]
    fn test_buried_card_without_run_rejected() {
        let seven = card(Rank::Seven, Suit::Hearts);
        let two = card(Rank::Two, Suit::Hearts);
        let eight = card(Rank::Eight, Suit::Spades);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([seven, two]).with_column([eight]),
        );

        assert_eq!(
            ctl.move_card(seven, SlotId::Column(1)).unwrap_err(),
            MoveError::StackNotMovable(seven)
        );
    }

    #[test]
    fn test_stack_to_temp_rejected() {
        let seven = card(Rank::Seven, Suit::Hearts);
        let six = card(Rank::Six, Suit::Clubs);
        let mut ctl = controller(Variant::Classic, Layout::new().with_column([seven, six]));

        assert_eq!(
            ctl.move_stack(0, 0, SlotId::TempBucket).unwrap_err(),
            MoveError::StackToNonColumn(SlotId::TempBucket)
        );
        assert_eq!(ctl.game().columns()[0].card_count(), 2);
    }

    #[test]
    fn test_move_reveals_klondike_column() {
        let hidden = Card::face_down(Rank::Two, Suit::Clubs);
        let ace = card(Rank::Ace, Suit::Hearts);
        let mut ctl = controller(Variant::Klondike, Layout::new().with_column([hidden, ace]));

        ctl.move_card(ace, SlotId::Foundation(Suit::Hearts)).unwrap();

        assert!(ctl.game().columns()[0].top_card().is_some_and(Card::is_visible));
        assert_eq!(ctl.game().foundation().top_card(Suit::Hearts), Some(&ace));
    }

    #[test]
    fn test_face_down_card_not_movable() {
        let hidden = Card::face_down(Rank::King, Suit::Clubs);
        let queen = card(Rank::Queen, Suit::Hearts);
        let mut ctl = controller(
            Variant::Klondike,
            Layout::new().with_column([hidden, queen]).with_column(Vec::new()),
        );

        assert_eq!(
            ctl.move_card(hidden, SlotId::Column(1)).unwrap_err(),
            MoveError::NotInteractable(hidden)
        );
    }

    #[test]
    fn test_unknown_target() {
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(Variant::Classic, Layout::new().with_column([five]));

        assert_eq!(
            ctl.move_card(five, SlotId::Column(40)).unwrap_err(),
            MoveError::UnknownSlot(SlotId::Column(40))
        );
        assert_eq!(
            ctl.move_card(five, SlotId::DrawnCards).unwrap_err(),
            MoveError::UnknownSlot(SlotId::DrawnCards)
        );
    }

    #[test]
    fn test_select_toggle_and_stack() {
        let seven = card(Rank::Seven, Suit::Hearts);
        let six = card(Rank::Six, Suit::Clubs);
        let mut ctl = controller(Variant::Classic, Layout::new().with_column([seven, six]));

        ctl.select_card(seven, SlotId::Column(0)).unwrap();
        assert_eq!(ctl.selection().stack(), Some(&[seven, six][..]));

        ctl.select_card(seven, SlotId::Column(0)).unwrap();
        assert!(ctl.selection().is_idle());

        ctl.select_card(six, SlotId::Column(0)).unwrap();
        assert_eq!(ctl.selection(), &Selection::Card { card: six, source: SlotId::Column(0) });

        assert_eq!(
            ctl.select_card(six, SlotId::Column(1)).unwrap_err(),
            MoveError::NotInSource { card: six, source: SlotId::Column(1) }
        );
    }

    #[test]
    fn test_click_flow() {
        let six = card(Rank::Six, Suit::Spades);
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([six]).with_column([five]),
        );

        assert!(ctl.click_card(five).is_none());
        assert_eq!(ctl.selection().card(), Some(&five));

        let outcome = ctl.click_card(six).unwrap();
        assert_eq!(outcome.event.destination(), Some(SlotId::Column(0)));
        assert!(ctl.selection().is_idle());
        assert_eq!(ctl.clicks(), 2);
    }

    #[test]
    fn test_click_refused_reselects() {
        let six = card(Rank::Six, Suit::Spades);
        let five = card(Rank::Five, Suit::Clubs);
        let mut ctl = controller(
            Variant::Classic,
            Layout::new().with_column([six]).with_column([five]),
        );

        ctl.click_card(five);
        assert!(ctl.click_card(six).is_none());
        assert_eq!(ctl.selection().card(), Some(&six));

        ctl.click_outside();
        assert!(ctl.selection().is_idle());
        assert_eq!(ctl.clicks(), 3);
    }

    #[test]
    fn test_click_slot_keeps_selection_on_failure() {
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(Variant::Klondike, Layout::new().with_column([five]).with_column(Vec::new()));

        ctl.click_card(five);
        assert!(ctl.click_slot(SlotId::Column(1)).is_none());
        assert_eq!(ctl.selection().card(), Some(&five));
    }

    #[test]
    fn test_draw_and_restart() {
        let mut ctl = controller(Variant::Klondike, Layout::new());
        let first = *ctl.game().deck().top_card().unwrap();

        let outcome = ctl.draw_card_from_deck().unwrap();
        assert_eq!(outcome.event, GameEvent::Drawn(first));
        assert_eq!(ctl.game().drawn().unwrap().top_card(), Some(&first));

        assert_eq!(ctl.restart_deck().unwrap_err(), MoveError::DeckNotEmpty);

        while ctl.draw_card_from_deck().is_ok() {}
        assert!(ctl.game().deck().is_empty());

        let outcome = ctl.restart_deck().unwrap();
        assert_eq!(outcome.event, GameEvent::DeckRestarted { returned: 52 });
        assert_eq!(ctl.game().deck().top_card(), Some(&first));
        assert_eq!(ctl.restart_deck().unwrap_err(), MoveError::NothingToRestart);
    }

    #[test]
    fn test_classic_deck_rules() {
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(Variant::Classic, Layout::new().with_column([five]));

        assert_eq!(ctl.draw_card_from_deck().unwrap_err(), MoveError::NoDrawnCardsArea);

        let outcome = ctl.return_card_to_deck(five).unwrap();
        assert_eq!(
            outcome.event,
            GameEvent::ReturnedToDeck { card: five, from: SlotId::Column(0) }
        );
        assert_eq!(ctl.game().deck().top_card(), Some(&five));

        let outcome = ctl.move_card_from_deck_to_slot(SlotId::Column(3)).unwrap();
        assert_eq!(outcome.event, GameEvent::MovedFromDeck { card: five, to: SlotId::Column(3) });
        assert!(ctl.game().columns()[3].top_card().is_some_and(Card::is_visible));
        ctl.game().audit().unwrap();
    }

    #[test]
    fn test_move_from_deck_rejected_leaves_deck() {
        let six = card(Rank::Six, Suit::Diamonds);
        let mut ctl = controller(Variant::Classic, Layout::new().with_column([six]));
        let before = ctl.game().deck().card_count();

        // King of Clubs is on top of the unshuffled deck; it cannot go on a six
        assert!(ctl.move_card_from_deck_to_slot(SlotId::Column(0)).is_err());
        assert_eq!(ctl.game().deck().card_count(), before);
    }

    #[test]
    fn test_klondike_return_forbidden() {
        let five = card(Rank::Five, Suit::Hearts);
        let mut ctl = controller(Variant::Klondike, Layout::new().with_column([five]));

        assert_eq!(
            ctl.return_card_to_deck(five).unwrap_err(),
            MoveError::ReturnToDeckForbidden
        );
        assert_eq!(
            ctl.move_card_from_deck_to_slot(SlotId::Column(1)).unwrap_err(),
            MoveError::NotInteractable(card(Rank::King, Suit::Clubs))
        );
    }

    #[test]
    fn test_events_published() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctl = controller(Variant::Klondike, Layout::new());
        let sink = Rc::clone(&log);
        ctl.subscribe_events(move |event| sink.borrow_mut().push(event.clone()));

        ctl.draw_card_from_deck().unwrap();
        ctl.shuffle_deck();

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert!(matches!(log[0], GameEvent::Drawn(_)));
        assert_eq!(log[1], GameEvent::DeckShuffled);
    }
}
