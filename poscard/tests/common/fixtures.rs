// fixtures.rs: commonly used card inputs

use poscard::CardRecord;

pub const SPACED_NUMBER: &str = "0000 0000 0000 0000";
pub const STRIPPED_NUMBER: &str = "0000000000000000";
pub const SHORT_NUMBER: &str = "000000000000000";

pub const VALID_EXPIRIES: [&str; 4] = ["05/21", "11/24", "01/00", "12/99"];
pub const INVALID_EXPIRIES: [&str; 6] = ["abcde123", "14/-0", "14/24", "00/24", "5/21", "05/2021"];

pub fn sample_record() -> CardRecord {
    CardRecord {
        card_number: STRIPPED_NUMBER.to_string(),
        cvv: "846".to_string(),
        expiry_date: "05/21".to_string(),
        name: "Joe Bloggs".to_string(),
        issue_number: "02".to_string(),
    }
}
