//! Round-trip parsing and serialization tests for vCard.
//!
//! Documents are parsed, written back and parsed again; the contact records
//! from both passes must be equal.

use abook_core::model::{Addressee, Agent, AddressType, KeyType, Media, PhoneType, Secrecy};

use super::fixtures::*;
use crate::rfc::vcard::build::serialize as serialize_cards;
use crate::rfc::vcard::core::VCardVersion;
use crate::rfc::vcard::parse::parse as parse_cards;
use crate::rfc::vcard::tool::{parse, serialize};

/// Parse contacts, serialize them in `version`, then parse again and compare.
fn round_trip(input: &str, version: VCardVersion) -> Result<Vec<Addressee>, String> {
    let first = parse(input);
    let serialized = serialize(&first, version);
    let second = parse(&serialized);

    if first.len() != second.len() {
        return Err(format!(
            "Contact count mismatch: {} vs {}\n{serialized}",
            first.len(),
            second.len()
        ));
    }
    for (a, b) in first.iter().zip(&second) {
        if a != b {
            return Err(format!("Contact mismatch:\n{a:#?}\nvs\n{b:#?}\n{serialized}"));
        }
    }

    Ok(first)
}

#[test]
fn full_30_card_maps_every_field() {
    let contacts = parse(VCARD_30_FULL);
    assert_eq!(contacts.len(), 1);
    let jane = &contacts[0];

    assert_eq!(jane.uid, "7c3c1a1e-0f7c-4c59-9a55-6d1b0c9e2f10");
    assert_eq!(jane.family_name, "Doe");
    assert_eq!(jane.suffix, "PhD");
    assert_eq!(jane.formatted_name, "Dr. Jane Q. Doe");
    assert_eq!(jane.nick_name, "JD");
    assert_eq!(jane.organization, "ACME, Inc.");
    assert_eq!(jane.note, "Met at the conference; follow up");
    assert_eq!(jane.categories, vec!["Friends", "Work"]);
    assert_eq!(jane.emails, vec!["jane@example.com", "jdoe@work.example.com"]);
    assert_eq!(jane.secrecy, Some(Secrecy::Private));
    assert_eq!(jane.url, "http://example.com/~jane");

    assert_eq!(jane.addresses.len(), 2);
    let home = &jane.addresses[0];
    assert_eq!(home.address_type, AddressType::HOME | AddressType::PREF);
    assert_eq!(home.extended, "Apt 4");
    assert_eq!(home.label, "1 Elm St\nSpringfield, IL");
    assert_eq!(jane.addresses[1].post_office_box, "PO Box 9");

    assert_eq!(
        jane.phone_numbers[0].phone_type,
        PhoneType::HOME | PhoneType::VOICE
    );
    assert_eq!(jane.keys[0].key_type, Some(KeyType::X509));
    assert_eq!(
        jane.photo,
        Media::Url("http://example.com/jane.jpg".to_string())
    );
    assert!(matches!(&jane.logo, Media::Inline { data, media_type } if data.len() == 8 && media_type == "PNG"));
    assert_eq!(
        jane.agent,
        Some(Agent::Url("mailto:assistant@example.com".to_string()))
    );
    assert_eq!(jane.custom("KADDRESSBOOK", "X-IMAddress"), Some("jane@jabber.org"));
}

#[test]
fn round_trip_30_full() {
    round_trip(VCARD_30_FULL, VCardVersion::V3_0).expect("round trip should succeed");
}

#[test]
fn round_trip_21_multi() {
    let contacts =
        round_trip(VCARD_21_MULTI, VCardVersion::V2_1).expect("round trip should succeed");
    assert_eq!(contacts.len(), 2);

    let forrest = &contacts[0];
    assert_eq!(forrest.given_name, "Forrest");
    assert_eq!(
        forrest.phone_numbers[0].phone_type,
        PhoneType::WORK | PhoneType::VOICE
    );
    assert_eq!(forrest.addresses.len(), 1);
    assert_eq!(
        forrest.addresses[0].label,
        "42 Plantation St.\nBaytown, LA 30314\nUnited States of America"
    );
    assert_eq!(forrest.emails, vec!["forrestgump@example.com"]);

    let jurgen = &contacts[1];
    assert_eq!(jurgen.formatted_name, "Jürgen Groß");
    assert_eq!(jurgen.note, "A note that was folded");
    assert!(matches!(&jurgen.photo, Media::Inline { data, media_type } if data.starts_with(b"GIF89a") && media_type == "GIF"));
}

#[test]
fn round_trip_across_versions() {
    let from_21 = parse(VCARD_21_MULTI);
    let as_30 = serialize(&from_21, VCardVersion::V3_0);
    assert_eq!(parse(&as_30), from_21);
}

#[test_log::test]
fn trailing_partial_card_is_discarded() {
    let contacts = parse(VCARD_TRAILING_PARTIAL);
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].formatted_name, "Complete");
}

#[test]
fn nested_agent_round_trip() {
    let contacts = round_trip(VCARD_21_NESTED_AGENT, VCardVersion::V2_1)
        .expect("round trip should succeed");
    let boss = &contacts[0];
    assert_eq!(boss.title, "CEO");

    let Some(Agent::Addressee(assistant)) = &boss.agent else {
        panic!("expected nested agent, got {:?}", boss.agent);
    };
    assert_eq!(assistant.family_name, "Assistant");
    assert_eq!(assistant.phone_numbers[0].phone_type, PhoneType::WORK);

    round_trip(VCARD_21_NESTED_AGENT, VCardVersion::V3_0).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_interleaved_addresses() {
    let contacts = round_trip(VCARD_30_INTERLEAVED, VCardVersion::V3_0)
        .expect("round trip should succeed");
    let pat = &contacts[0];

    let summary: Vec<(&str, &str)> = pat
        .addresses
        .iter()
        .map(|a| (a.street.as_str(), a.label.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![("", "Label one"), ("Main St", "Label two"), ("Side St", "")]
    );
    assert_eq!(pat.custom("FOO", ""), Some("bar"));
    assert!(pat.birthday.is_some_and(|b| b.time.is_some()));
    assert_eq!(pat.revision, None);

    round_trip(VCARD_30_INTERLEAVED, VCardVersion::V2_1).expect("round trip should succeed");
}

#[test]
fn card_level_round_trip() {
    for input in [
        VCARD_30_FULL,
        VCARD_21_MULTI,
        VCARD_21_NESTED_AGENT,
        VCARD_30_INTERLEAVED,
    ] {
        let first = parse_cards(input);
        let serialized = serialize_cards(&first);
        let second = parse_cards(&serialized);
        assert_eq!(first, second, "card mismatch for\n{serialized}");
    }
}
