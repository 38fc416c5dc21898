//! Card to contact record conversion.

use std::borrow::Cow;

use abook_core::constants::CUSTOM_PREFIX;
use abook_core::model::{
    Address, Addressee, Agent, ContactDate, Key, KeyType, Media, PhoneNumber, TimeZone,
};

use super::{ToolOptions, types};
use crate::rfc::vcard::build::value_text;
use crate::rfc::vcard::codec::{
    parse_class, parse_date_time, parse_geo, parse_utc_offset, split_escaped, unescape_text,
};
use crate::rfc::vcard::core::{VCard, VCardLine, VCardValue, names};
use crate::rfc::vcard::parse::parse as parse_cards;

/// Parses `text` and maps every card. `depth` counts enclosing AGENT cards.
pub(super) fn addressees(text: &str, depth: usize, options: ToolOptions) -> Vec<Addressee> {
    parse_cards(text)
        .iter()
        .map(|card| addressee(card, depth, options))
        .collect()
}

fn addressee(card: &VCard, depth: usize, options: ToolOptions) -> Addressee {
    let mut addr = Addressee::new();
    let mut previous_address: Option<String> = None;

    for line in card.all_lines() {
        let key = line.key();
        match key.as_str() {
            "adr" => previous_address = Some(apply_address(&mut addr, line)),
            "label" => apply_label(&mut addr, line, previous_address.take().as_deref()),
            _ => {
                previous_address = None;
                apply_line(&mut addr, &key, line, depth, options);
            }
        }
    }

    addr
}

fn apply_line(addr: &mut Addressee, key: &str, line: &VCardLine, depth: usize, options: ToolOptions) {
    match key {
        "agent" => {
            if let Some(agent) = agent(line, depth, options) {
                addr.agent = Some(agent);
            }
        }
        "bday" => addr.birthday = date(line),
        "categories" => {
            for category in split_escaped(&raw_text(line), ',') {
                if !category.is_empty() {
                    addr.insert_category(category);
                }
            }
        }
        "class" => addr.secrecy = parse_class(&raw_text(line)),
        "email" => {
            let email = text(line);
            if !email.is_empty() {
                addr.insert_email(email, line.has_param_value(names::TYPE, names::PREF));
            }
        }
        "fn" => addr.formatted_name = text(line),
        "geo" => addr.geo = parse_geo(&raw_text(line)),
        "key" => addr.insert_key(key_from(line)),
        "logo" => addr.logo = media(line),
        "mailer" => addr.mailer = text(line),
        "n" => apply_name(addr, line),
        "name" => addr.name = text(line),
        "nickname" => addr.nick_name = text(line),
        "note" => addr.note = text(line),
        "org" => addr.organization = text(line),
        "photo" => addr.photo = media(line),
        "prodid" => addr.product_id = text(line),
        "rev" => addr.revision = date(line),
        "role" => addr.role = text(line),
        "sort-string" => addr.sort_string = text(line),
        "sound" => addr.sound = media(line),
        "tel" => {
            let number = text(line);
            if !number.is_empty() {
                let phone_type = types::phone_type(line.types());
                addr.insert_phone_number(PhoneNumber::new(number, phone_type));
            }
        }
        "title" => addr.title = text(line),
        "tz" => addr.time_zone = parse_utc_offset(&raw_text(line)).map(TimeZone::new),
        "uid" => addr.uid = text(line),
        "url" => addr.url = raw_text(line).into_owned(),
        "version" => {}
        _ if key.starts_with("x-") => apply_custom(addr, line),
        _ => tracing::trace!(identifier = %line.identifier, "Ignoring unsupported field"),
    }
}

/// The value as written, with binary payloads read as UTF-8.
fn raw_text(line: &VCardLine) -> Cow<'_, str> {
    match &line.value {
        VCardValue::Text(s) => Cow::Borrowed(s),
        VCardValue::Binary(bytes) => String::from_utf8_lossy(bytes),
        other => Cow::Owned(value_text(other)),
    }
}

/// The value as unescaped text, with CRLF line breaks normalized to LF.
fn text(line: &VCardLine) -> String {
    let text = unescape_text(&raw_text(line));
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

fn date(line: &VCardLine) -> Option<ContactDate> {
    let raw = raw_text(line);
    let parsed = parse_date_time(&raw);
    if parsed.is_none() {
        tracing::debug!(identifier = %line.identifier, value = %raw, "Unparseable date");
    }
    parsed
}

fn apply_name(addr: &mut Addressee, line: &VCardLine) {
    let fields = [
        &mut addr.family_name,
        &mut addr.given_name,
        &mut addr.additional_name,
        &mut addr.prefix,
        &mut addr.suffix,
    ];
    for (field, part) in fields.into_iter().zip(split_escaped(&raw_text(line), ';')) {
        *field = part;
    }
}

/// Adds an address and returns its id.
fn apply_address(addr: &mut Addressee, line: &VCardLine) -> String {
    let mut address = Address::new(types::address_type(line.types()));
    address.set_parts(split_escaped(&raw_text(line), ';'));
    let id = address.id.clone();
    addr.insert_address(address);
    id
}

/// Attaches a label to the address written on the line just before it when
/// the types match, otherwise keeps it as a label-only address.
fn apply_label(addr: &mut Addressee, line: &VCardLine, previous_address: Option<&str>) {
    let address_type = types::address_type(line.types());
    let label = text(line);

    if let Some(id) = previous_address
        && let Some(address) = addr
            .addresses
            .iter_mut()
            .find(|a| a.id == id && a.address_type == address_type && a.label.is_empty())
    {
        address.label = label;
        return;
    }

    let mut address = Address::new(address_type);
    address.label = label;
    addr.insert_address(address);
}

fn agent(line: &VCardLine, depth: usize, options: ToolOptions) -> Option<Agent> {
    if line.is_uri() {
        let url = raw_text(line).into_owned();
        return (!url.is_empty()).then_some(Agent::Url(url));
    }

    if depth >= options.max_agent_depth {
        tracing::warn!(depth, max = options.max_agent_depth, "Agent nesting too deep, ignoring");
        return None;
    }

    let nested = text(line);
    let first = addressees(&nested, depth + 1, options).into_iter().next()?;
    Some(Agent::Addressee(Box::new(first)))
}

fn key_from(line: &VCardLine) -> Key {
    let key_type = line.types().next().and_then(KeyType::from_token);
    match &line.value {
        VCardValue::Binary(bytes) => Key::binary(bytes.clone(), key_type),
        _ => Key::text(text(line), key_type),
    }
}

/// Inline data, or a URL unless the value was declared base64. Base64 that
/// failed to decode is dropped.
fn media(line: &VCardLine) -> Media {
    if let VCardValue::Binary(data) = &line.value {
        return Media::Inline {
            data: data.clone(),
            media_type: line.types().next().unwrap_or_default().to_string(),
        };
    }

    let url = raw_text(line);
    if url.is_empty() {
        return Media::None;
    }
    let base64 = line
        .param_value(names::ENCODING)
        .is_some_and(|e| e.eq_ignore_ascii_case(names::B) || e.eq_ignore_ascii_case(names::BASE64));
    if base64 && !line.is_uri() {
        tracing::warn!(identifier = %line.identifier, "Undecodable inline media, ignoring");
        return Media::None;
    }
    Media::Url(url.into_owned())
}

/// `X-APP-NAME` becomes a custom field; the identifier is split on the
/// first `-` after the prefix. `X-APP` without a second dash keeps an empty
/// name.
fn apply_custom(addr: &mut Addressee, line: &VCardLine) {
    let rest = line.identifier.get(CUSTOM_PREFIX.len()..).unwrap_or_default();
    let (app, name) = rest.split_once('-').unwrap_or((rest, ""));
    if app.is_empty() {
        tracing::debug!(identifier = %line.identifier, "Extension field without a name, ignoring");
        return;
    }
    addr.insert_custom(app, name, text(line));
}
