//! TYPE parameter tokens for addresses and phone numbers.

use abook_core::model::{AddressType, PhoneType};

/// Address flags in output order with their TYPE tokens.
pub const ADDRESS_TYPES: [(AddressType, &str); 7] = [
    (AddressType::DOM, "dom"),
    (AddressType::INTL, "intl"),
    (AddressType::POSTAL, "postal"),
    (AddressType::PARCEL, "parcel"),
    (AddressType::HOME, "home"),
    (AddressType::WORK, "work"),
    (AddressType::PREF, "pref"),
];

/// Phone flags in output order with their TYPE tokens.
pub const PHONE_TYPES: [(PhoneType, &str); 14] = [
    (PhoneType::HOME, "HOME"),
    (PhoneType::WORK, "WORK"),
    (PhoneType::MSG, "MSG"),
    (PhoneType::PREF, "PREF"),
    (PhoneType::VOICE, "VOICE"),
    (PhoneType::FAX, "FAX"),
    (PhoneType::CELL, "CELL"),
    (PhoneType::VIDEO, "VIDEO"),
    (PhoneType::BBS, "BBS"),
    (PhoneType::MODEM, "MODEM"),
    (PhoneType::CAR, "CAR"),
    (PhoneType::ISDN, "ISDN"),
    (PhoneType::PCS, "PCS"),
    (PhoneType::PAGER, "PAGER"),
];

/// ORs together the address flags named by `tokens`. Unknown tokens are ignored.
pub fn address_type<'a>(tokens: impl IntoIterator<Item = &'a str>) -> AddressType {
    tokens
        .into_iter()
        .filter_map(|t| lookup(&ADDRESS_TYPES, t))
        .fold(AddressType::empty(), |acc, flag| acc | flag)
}

/// ORs together the phone flags named by `tokens`. Unknown tokens are ignored.
pub fn phone_type<'a>(tokens: impl IntoIterator<Item = &'a str>) -> PhoneType {
    tokens
        .into_iter()
        .filter_map(|t| lookup(&PHONE_TYPES, t))
        .fold(PhoneType::empty(), |acc, flag| acc | flag)
}

/// Returns the tokens for every flag set in `flags`, in table order.
pub fn address_tokens(flags: AddressType) -> impl Iterator<Item = &'static str> {
    ADDRESS_TYPES
        .iter()
        .filter(move |(flag, _)| flags.contains(*flag))
        .map(|(_, token)| *token)
}

/// Returns the tokens for every flag set in `flags`, in table order.
pub fn phone_tokens(flags: PhoneType) -> impl Iterator<Item = &'static str> {
    PHONE_TYPES
        .iter()
        .filter(move |(flag, _)| flags.contains(*flag))
        .map(|(_, token)| *token)
}

fn lookup<F: Copy>(table: &[(F, &str)], token: &str) -> Option<F> {
    table
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(token.trim()))
        .map(|(flag, _)| *flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_flags_accumulate_with_or() {
        let t = address_type(["HOME", "home", "Pref", "unknown"]);
        assert_eq!(t, AddressType::HOME | AddressType::PREF);
    }

    #[test]
    fn phone_flags_accumulate_with_or() {
        let t = phone_type(["cell", "VOICE", "cell"]);
        assert_eq!(t, PhoneType::CELL | PhoneType::VOICE);
        assert_eq!(phone_type(Vec::<&str>::new()), PhoneType::empty());
    }

    #[test]
    fn tokens_in_table_order() {
        let tokens: Vec<_> = address_tokens(AddressType::WORK | AddressType::DOM).collect();
        assert_eq!(tokens, vec!["dom", "work"]);

        let tokens: Vec<_> = phone_tokens(PhoneType::PAGER | PhoneType::HOME).collect();
        assert_eq!(tokens, vec!["HOME", "PAGER"]);
    }
}
