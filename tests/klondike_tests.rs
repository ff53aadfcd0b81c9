//! Klondike variant integration tests.
//!
//! Triangle deal, King-only empty columns, face-down reveals and the
//! stock/waste cycle.

use rust_solitaire::core::{Card, GameConfig, Rank, Suit, Variant, KLONDIKE_COLUMNS};
use rust_solitaire::game::{Controller, Game, GameEvent, Layout, MoveError};
use rust_solitaire::zones::SlotId;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn klondike(layout: Layout) -> Controller {
    let config = GameConfig::new(Variant::Klondike).with_reshuffle_on_restart(false);
    Controller::new(Game::from_layout(config, layout).unwrap())
}

// =============================================================================
// Deal
// =============================================================================

/// Test the 1..7 triangle with only the last card of each column face up.
#[test]
fn test_klondike_deal_shape() {
    let game = Game::klondike(7);

    assert_eq!(game.columns().len(), KLONDIKE_COLUMNS);
    for (i, column) in game.columns().iter().enumerate() {
        assert_eq!(column.card_count(), i + 1);
        let visible: Vec<_> = column.cards().iter().map(|c| c.is_visible()).collect();
        let mut expected = vec![false; i];
        expected.push(true);
        assert_eq!(visible, expected);
    }
    assert_eq!(game.deck().card_count(), 52 - 28);
    assert!(game.drawn().is_some_and(|d| d.is_empty()));
    game.audit().unwrap();
}

/// Test that Klondike refuses a column count other than seven.
#[test]
fn test_klondike_column_count_fixed() {
    assert!(Game::new(GameConfig::new(Variant::Klondike).with_columns(8)).is_err());
}

// =============================================================================
// Columns
// =============================================================================

/// Test that only a King may start an empty Klondike column.
#[test]
fn test_empty_column_king_only() {
    let queen = card(Rank::Queen, Suit::Hearts);
    let king = card(Rank::King, Suit::Spades);
    let mut ctl = klondike(Layout::new().with_column([queen]).with_column([king]));

    assert!(ctl.move_card(queen, SlotId::Column(2)).is_err());
    ctl.move_card(king, SlotId::Column(2)).unwrap();
    ctl.move_card(queen, SlotId::Column(2)).unwrap();

    assert_eq!(ctl.game().columns()[2].cards(), &[king, queen]);
}

/// Test that moving the last face-up card turns up the card beneath.
#[test]
fn test_reveal_after_move() {
    let hidden = Card::face_down(Rank::Nine, Suit::Clubs);
    let five = card(Rank::Five, Suit::Hearts);
    let six = card(Rank::Six, Suit::Spades);
    let mut ctl = klondike(Layout::new().with_column([hidden, five]).with_column([six]));

    assert!(!ctl.can_interact(&hidden));
    ctl.move_card(five, SlotId::Column(1)).unwrap();

    assert!(ctl.can_interact(&hidden));
    assert!(ctl.game().columns()[0].cards()[0].is_visible());
    ctl.game().audit().unwrap();
}

/// Test that a buried face-up run can be selected and moved, but a lone
/// buried card cannot be selected on its own.
#[test]
fn test_stack_interaction() {
    let hidden = Card::face_down(Rank::Two, Suit::Diamonds);
    let eight = card(Rank::Eight, Suit::Clubs);
    let seven = card(Rank::Seven, Suit::Hearts);
    let nine = card(Rank::Nine, Suit::Hearts);
    let mut ctl = klondike(
        Layout::new()
            .with_column([hidden, eight, seven])
            .with_column([nine]),
    );

    ctl.select_card(eight, SlotId::Column(0)).unwrap();
    assert_eq!(ctl.selection().stack(), Some(&[eight, seven][..]));

    let outcome = ctl.click_slot(SlotId::Column(1)).unwrap();
    assert_eq!(outcome.event.card_count(), 2);
    assert_eq!(ctl.game().columns()[1].cards(), &[nine, eight, seven]);
    assert!(ctl.game().columns()[0].top_card().is_some_and(|c| c.is_visible()));
}

// =============================================================================
// Temp Slots
// =============================================================================

/// Test that the Klondike temp row takes a King only while entirely empty.
#[test]
fn test_temp_row_king_only() {
    let king = card(Rank::King, Suit::Hearts);
    let other_king = card(Rank::King, Suit::Clubs);
    let jack = card(Rank::Jack, Suit::Clubs);
    let mut ctl = klondike(
        Layout::new()
            .with_column([king])
            .with_column([other_king])
            .with_column([jack]),
    );

    assert!(ctl.move_card(jack, SlotId::TempBucket).is_err());
    ctl.move_card(king, SlotId::TempBucket).unwrap();
    assert!(ctl.move_card(other_king, SlotId::TempBucket).is_err());
}

// =============================================================================
// Stock and Waste
// =============================================================================

/// Test that drawn cards come off the deck top, face up, and only the top
/// drawn card is playable.
#[test]
fn test_draw_to_waste() {
    let mut ctl = klondike(Layout::new());
    let first = *ctl.game().deck().top_card().unwrap();

    ctl.draw_card_from_deck().unwrap();
    let second = *ctl.game().deck().top_card().unwrap();
    ctl.draw_card_from_deck().unwrap();

    let drawn = ctl.game().drawn().unwrap();
    assert_eq!(drawn.cards(), &[first, second]);
    assert!(drawn.cards().iter().all(|c| c.is_visible()));
    assert!(ctl.can_interact(&second));
    assert!(!ctl.can_interact(&first));
    assert_eq!(
        ctl.move_card(first, SlotId::Column(0)).unwrap_err(),
        MoveError::NotInteractable(first)
    );
}

/// Test that an Ace from the waste goes to its foundation.
#[test]
fn test_waste_to_foundation() {
    let ace = card(Rank::Ace, Suit::Clubs);
    let mut ctl = klondike(Layout::new().with_drawn([ace]));

    assert_eq!(ctl.available_moves(&ace), vec![SlotId::Foundation(Suit::Clubs)]);
    ctl.move_card(ace, SlotId::Foundation(Suit::Clubs)).unwrap();
    assert!(ctl.game().drawn().unwrap().is_empty());
}

/// Test that an exhausted stock restarts from the waste and draws again,
/// in the same order when reshuffling is off.
#[test]
fn test_restart_cycle() {
    let mut ctl = klondike(Layout::new());
    let mut first_pass = Vec::new();
    while let Ok(outcome) = ctl.draw_card_from_deck() {
        if let GameEvent::Drawn(card) = outcome.event {
            first_pass.push(card);
        }
    }
    assert_eq!(first_pass.len(), 52);
    assert_eq!(ctl.draw_card_from_deck().unwrap_err(), MoveError::DeckEmpty);

    // The deck click restarts when there is nothing left to draw
    let outcome = ctl.click_deck().unwrap();
    assert_eq!(outcome.event, GameEvent::DeckRestarted { returned: 52 });
    assert!(ctl.game().drawn().unwrap().is_empty());

    let mut second_pass = Vec::new();
    while let Ok(outcome) = ctl.draw_card_from_deck() {
        if let GameEvent::Drawn(card) = outcome.event {
            second_pass.push(card);
        }
    }
    assert_eq!(first_pass, second_pass);
    ctl.game().audit().unwrap();
}

/// Test that a reshuffling restart returns the same cards in some order.
#[test]
fn test_restart_reshuffles() {
    let config = GameConfig::new(Variant::Klondike).with_seed(17);
    let mut ctl = Controller::new(Game::new(config).unwrap());

    let mut drawn = Vec::new();
    while let Ok(outcome) = ctl.draw_card_from_deck() {
        if let GameEvent::Drawn(card) = outcome.event {
            drawn.push(card.id());
        }
    }
    ctl.restart_deck().unwrap();

    let mut returned: Vec<_> = ctl.game().deck().cards().iter().map(|c| c.id()).collect();
    drawn.sort_unstable();
    returned.sort_unstable();
    assert_eq!(drawn, returned);
    assert!(ctl.draw_card_from_deck().is_ok());
}

/// Test that Klondike never lets a card back into the deck.
#[test]
fn test_no_return_to_deck() {
    let five = card(Rank::Five, Suit::Diamonds);
    let mut ctl = klondike(Layout::new().with_column([five]));

    assert!(!ctl.available_moves(&five).contains(&SlotId::Deck));
    assert_eq!(
        ctl.move_card(five, SlotId::Deck).unwrap_err(),
        MoveError::ReturnToDeckForbidden
    );

    ctl.select_card(five, SlotId::Column(0)).unwrap();
    assert!(ctl.click_deck().is_none());
    assert!(ctl.selection().is_idle());
    assert_eq!(ctl.game().locate(&five), Some(SlotId::Column(0)));
}
