//! Card integration tests.

use std::collections::HashSet;

use stdeck::{Card, CardError, ParseCardError, Rank, Suit};

#[test]
fn enumerations_keep_declared_order() {
    let ranks: Vec<&str> = Rank::ALL.iter().map(|rank| rank.name()).collect();
    assert_eq!(
        ranks,
        [
            "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
            "Queen", "King",
        ]
    );

    let suits: Vec<String> = Suit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(suits, ["Hearts", "Diamonds", "Clubs", "Spades"]);
}

#[test]
fn accessors_and_display_text() {
    let card = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(card.rank(), Rank::Ace);
    assert_eq!(card.suit(), Suit::Spades);
    assert_eq!(card.to_string(), "Ace of Spades");
    assert_eq!(
        Card::new(Rank::Ten, Suit::Diamonds).to_string(),
        "Ten of Diamonds"
    );
}

#[test]
fn equality_is_structural() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let other_ace = Card::new(Rank::Ace, Suit::Spades);
    let ten = Card::new(Rank::Ten, Suit::Diamonds);

    assert_eq!(ace, other_ace);
    assert_eq!(other_ace, ace);
    assert_ne!(ace, ten);
    assert_ne!(ten, ace);

    for a in [ace, other_ace, ten] {
        for b in [ace, other_ace, ten] {
            assert_eq!(a == b, a.to_string() == b.to_string());
        }
    }

    let set: HashSet<Card> = [ace, other_ace, ten].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_is_suit_major() {
    assert!(Card::new(Rank::King, Suit::Hearts) < Card::new(Rank::Ace, Suit::Diamonds));
    assert!(Card::new(Rank::Two, Suit::Spades) < Card::new(Rank::Three, Suit::Spades));
}

#[test]
fn try_new_requires_both_fields() {
    assert_eq!(
        Card::try_new(Some(Rank::Queen), Some(Suit::Clubs)),
        Ok(Card::new(Rank::Queen, Suit::Clubs))
    );

    let err = Card::try_new(None, Some(Suit::Spades)).unwrap_err();
    assert_eq!(err, CardError::MissingRank);
    assert_eq!(err.field(), "rank");
    assert_eq!(err.to_string(), "card rank is empty");

    let err = Card::try_new(Some(Rank::Ace), None).unwrap_err();
    assert_eq!(err, CardError::MissingSuit);
    assert_eq!(err.field(), "suit");
    assert_eq!(err.to_string(), "card suit is empty");

    assert_eq!(Card::try_new(None, None), Err(CardError::MissingRank));
}

#[test]
fn rank_numeric_values() {
    for (index, rank) in Rank::ALL.into_iter().enumerate() {
        let value = u8::try_from(index + 1).unwrap();
        assert_eq!(rank.value(), value);
        assert_eq!(Rank::from_value(value), Some(rank));
    }
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(14), None);
}

#[test]
fn parses_display_text() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    assert_eq!("Ace Spades".parse::<Card>(), Err(ParseCardError::Format));
    assert_eq!("One of Spades".parse::<Card>(), Err(ParseCardError::Rank));
    assert_eq!("Ace of Stars".parse::<Card>(), Err(ParseCardError::Suit));
    assert_eq!("ace of spades".parse::<Card>(), Err(ParseCardError::Rank));
}
