#[path = "../common/mod.rs"]
mod common;

use poscard::test_support::RecordingSink;
use poscard::{Card, CardRecord, Error};

#[test]
fn record_round_trip() -> anyhow::Result<()> {
    let card = common::sample_record().into_card_with_sink(RecordingSink::new())?;
    assert_eq!(card.sink().failures(), 0);
    assert_eq!(CardRecord::from(&card), common::sample_record());
    Ok(())
}

#[test]
fn record_with_bad_number_fails() {
    let mut record = common::sample_record();
    record.card_number = common::SHORT_NUMBER.to_string();
    let result: poscard::Result<Card> = Card::try_from(record);
    assert!(matches!(
        result,
        Err(Error::InvalidCardNumberLength { actual: 15, .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn record_json_round_trip() -> anyhow::Result<()> {
    let json = serde_json::to_string(&common::sample_record())?;
    assert!(json.contains("\"cardNumber\""));
    let back: CardRecord = serde_json::from_str(&json)?;
    let card: Card = Card::try_from(back)?;
    assert_eq!(card.expiry_date(), "05/21");
    Ok(())
}
