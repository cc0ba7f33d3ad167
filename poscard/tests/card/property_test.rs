use poscard::Card;
use poscard::test_support::recording_card;
use proptest::prelude::*;

proptest! {
    #[test]
    fn card_number_accepted_iff_sixteen_after_strip(input in "[0-9a-z \\t]{0,24}") {
        let mut card = Card::new();
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let accepted = card.set_card_number(&input);
        prop_assert_eq!(accepted, stripped.chars().count() == 16);
        if accepted {
            prop_assert_eq!(card.card_number(), stripped.as_str());
        } else {
            prop_assert_eq!(card.card_number(), "");
        }
    }

    #[test]
    fn cvv_accepted_iff_three_or_four(input in "\\PC{0,6}") {
        let mut card = Card::new();
        let len = input.chars().count();
        let accepted = card.set_cvv(&input);
        prop_assert_eq!(accepted, len == 3 || len == 4);
        let expected = if accepted { input.as_str() } else { "" };
        prop_assert_eq!(card.cvv(), expected);
    }

    #[test]
    fn name_and_issue_number_stored_verbatim(name in "\\PC*", issue in "\\PC*") {
        let mut card = Card::new();
        prop_assert!(card.set_name(&name));
        prop_assert!(card.set_issue_number(&issue));
        prop_assert_eq!(card.name(), name.as_str());
        prop_assert_eq!(card.issue_number(), issue.as_str());
    }

    #[test]
    fn expiry_stored_verbatim_when_accepted(input in "[0-9]{2}/[0-9]{2}") {
        let mut card = Card::new();
        let month: u8 = input[..2].parse().unwrap();
        let accepted = card.set_expiry_date(&input);
        prop_assert_eq!(accepted, (1..=12).contains(&month));
        if accepted {
            prop_assert_eq!(card.expiry_date(), input.as_str());
        }
    }

    #[test]
    fn getters_are_idempotent(number in "[0-9]{16}", cvv in "[0-9]{3,4}") {
        let mut card = recording_card();
        card.set_card_number(&number);
        card.set_cvv(&cvv);
        prop_assert_eq!(card.card_number(), card.card_number());
        prop_assert_eq!(card.cvv(), card.cvv());
        prop_assert_eq!(card.expiry_date(), card.expiry_date());
        prop_assert_eq!(card.to_string(), card.to_string());
    }

    #[test]
    fn rejected_value_keeps_previous(first in "[0-9]{16}", second in "[0-9]{0,15}") {
        let mut card = Card::new();
        prop_assert!(card.set_card_number(&first));
        prop_assert!(!card.set_card_number(&second));
        prop_assert_eq!(card.card_number(), first.as_str());
    }
}
