use poscard::test_support::{recording_card, sample_card};
use poscard::{CardRecord, Field};
use proptest::prelude::*;

#[test]
fn sample_card_display() {
    let card = sample_card();
    assert_eq!(
        card.to_string(),
        "Card{name=Joe Bloggs, expiryDate=05/21, cardNumber=4444333322221111, cvv=NOT PRINTED}"
    );
}

#[test]
fn failed_cvv_is_not_logged() {
    let mut card = recording_card();
    assert!(!card.set_cvv("98765"));
    let events = card.sink().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field, Field::Cvv);
    assert_eq!(events[0].attempted, None);
    assert!(!card.sink().lines()[0].contains("98765"));
}

proptest! {
    #[test]
    fn cvv_never_in_textual_dumps(cvv in "[0-9]{3,4}") {
        // keep other fields free of digits so a match can only be the cvv
        let mut card = recording_card();
        card.set_name("Joe Bloggs");
        prop_assert!(card.set_cvv(&cvv));

        let display = card.to_string();
        let debug = format!("{:?}", card);
        let info = card.info().to_string();
        let record_debug = format!("{:?}", CardRecord::from(&card));
        prop_assert!(!display.contains(&cvv));
        prop_assert!(!debug.contains(&cvv));
        prop_assert!(!info.contains(&cvv));
        prop_assert!(!record_debug.contains(&cvv));
        for line in card.sink().lines() {
            prop_assert!(!line.contains(&cvv));
        }
    }
}
