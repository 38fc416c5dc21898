//! Contact record to card conversion.

use abook_core::constants::CUSTOM_PREFIX;
use abook_core::model::{Address, Addressee, Agent, Key, KeyData, Media, PhoneNumber};

use super::{ToolOptions, types};
use crate::rfc::vcard::build::{SerializeOptions, serialize_with, value_text};
use crate::rfc::vcard::codec::{escape_text, needs_encoding};
use crate::rfc::vcard::core::{VCard, VCardLine, VCardParameter, VCardValue, VCardVersion};

/// Builds the card for one contact. Fields are emitted in a fixed order;
/// empty values are left out.
pub(super) fn card(
    addr: &Addressee,
    version: VCardVersion,
    depth: usize,
    options: ToolOptions,
) -> VCard {
    let mut builder = CardBuilder::new(version);
    let v3 = version == VCardVersion::V3_0;

    for address in &addr.addresses {
        builder.address(address);
    }
    if let Some(agent) = &addr.agent {
        builder.agent(agent, depth, options);
    }
    if let Some(birthday) = addr.birthday {
        builder.push(VCardLine::new("BDAY", VCardValue::DateTime(birthday)));
    }
    if v3 {
        builder.push(VCardLine::new(
            "CATEGORIES",
            VCardValue::TextList(addr.categories.clone()),
        ));
        if let Some(secrecy) = addr.secrecy {
            builder.push(VCardLine::new("CLASS", VCardValue::Class(secrecy)));
        }
    }
    builder.emails(&addr.emails);
    builder.text("FN", &addr.formatted_name);
    if let Some(geo) = addr.geo {
        builder.push(VCardLine::new("GEO", VCardValue::Geo(geo)));
    }
    for key in &addr.keys {
        builder.key(key);
    }
    builder.media("LOGO", &addr.logo);
    builder.text("MAILER", &addr.mailer);
    builder.push(VCardLine::new(
        "N",
        VCardValue::Structured(vec![
            addr.family_name.clone(),
            addr.given_name.clone(),
            addr.additional_name.clone(),
            addr.prefix.clone(),
            addr.suffix.clone(),
        ]),
    ));
    builder.text("NAME", &addr.name);
    if v3 {
        builder.text("NICKNAME", &addr.nick_name);
    }
    builder.text("NOTE", &addr.note);
    builder.text("ORG", &addr.organization);
    builder.media("PHOTO", &addr.photo);
    if v3 {
        builder.text("PRODID", &addr.product_id);
    }
    if let Some(revision) = addr.revision {
        builder.push(VCardLine::new("REV", VCardValue::DateTime(revision)));
    }
    builder.text("ROLE", &addr.role);
    if v3 {
        builder.text("SORT-STRING", &addr.sort_string);
    }
    builder.media("SOUND", &addr.sound);
    for phone in &addr.phone_numbers {
        builder.phone(phone);
    }
    builder.text("TITLE", &addr.title);
    if let Some(tz) = addr.time_zone {
        builder.push(VCardLine::new("TZ", VCardValue::UtcOffset(tz.offset)));
    }
    builder.text("UID", &addr.uid);
    builder.push(VCardLine::new("URL", addr.url.as_str()));
    for custom in &addr.customs {
        let identifier = if custom.name.is_empty() {
            format!("{CUSTOM_PREFIX}{}", custom.app)
        } else {
            format!("{CUSTOM_PREFIX}{}-{}", custom.app, custom.name)
        };
        builder.text(&identifier, &custom.value);
    }

    builder.finish()
}

struct CardBuilder {
    card: VCard,
    version: VCardVersion,
}

impl CardBuilder {
    fn new(version: VCardVersion) -> Self {
        Self {
            card: VCard::new(version),
            version,
        }
    }

    /// Adds a line unless its value is empty. 2.1 text that is not plain
    /// printable ASCII is marked for quoted-printable output.
    fn push(&mut self, mut line: VCardLine) {
        if line.value.is_empty() {
            return;
        }
        if self.version == VCardVersion::V2_1
            && !matches!(line.value, VCardValue::Binary(_))
            && needs_encoding(&value_text(&line.value))
        {
            line.add_param(VCardParameter::charset("UTF-8"));
            line.add_param(VCardParameter::encoding("QUOTED-PRINTABLE"));
        }
        self.card.add_line(line);
    }

    fn text(&mut self, identifier: &str, value: &str) {
        self.push(VCardLine::new(identifier, escape_text(value)));
    }

    fn binary(&self, identifier: &str, data: &[u8]) -> VCardLine {
        let encoding = match self.version {
            VCardVersion::V2_1 => "BASE64",
            VCardVersion::V3_0 => "b",
        };
        VCardLine::new(identifier, data.to_vec()).with_param(VCardParameter::encoding(encoding))
    }

    fn address(&mut self, address: &Address) {
        let tokens: Vec<String> = types::address_tokens(address.address_type)
            .map(String::from)
            .collect();
        let with_types = |line: VCardLine| {
            if tokens.is_empty() {
                line
            } else {
                line.with_param(VCardParameter::multi("TYPE", tokens.clone()))
            }
        };

        if !address.is_empty() {
            let parts = address.parts().map(String::from).to_vec();
            self.push(with_types(VCardLine::new("ADR", VCardValue::Structured(parts))));
        }
        if !address.label.is_empty() {
            self.push(with_types(VCardLine::new(
                "LABEL",
                escape_text(&address.label),
            )));
        }
    }

    fn agent(&mut self, agent: &Agent, depth: usize, options: ToolOptions) {
        match agent {
            Agent::Url(url) => self.push(
                VCardLine::new("AGENT", url.as_str())
                    .with_param(VCardParameter::value_type("uri")),
            ),
            Agent::Addressee(nested) => {
                if depth >= options.max_agent_depth {
                    tracing::warn!(depth, "Agent nesting too deep, not written");
                    return;
                }
                let nested_card = card(nested, self.version, depth + 1, options);
                let text = serialize_with(
                    std::slice::from_ref(&nested_card),
                    SerializeOptions { fold: false },
                );
                self.push(VCardLine::new(
                    "AGENT",
                    escape_text(&text).replace(':', "\\:"),
                ));
            }
        }
    }

    /// The first of several addresses is marked preferred.
    fn emails(&mut self, emails: &[String]) {
        let several = emails.len() > 1;
        for (i, email) in emails.iter().enumerate() {
            let mut line = VCardLine::new("EMAIL", escape_text(email));
            if i == 0 && several {
                line.add_param(VCardParameter::type_param("PREF"));
            }
            self.push(line);
        }
    }

    fn key(&mut self, key: &Key) {
        let mut line = match &key.data {
            KeyData::Binary(bytes) => self.binary("KEY", bytes),
            KeyData::Text(text) => VCardLine::new("KEY", escape_text(text)),
        };
        if let Some(key_type) = &key.key_type {
            line.add_param(VCardParameter::type_param(key_type.token()));
        }
        self.push(line);
    }

    fn media(&mut self, identifier: &str, media: &Media) {
        match media {
            Media::None => {}
            Media::Url(url) => self.push(
                VCardLine::new(identifier, url.as_str())
                    .with_param(VCardParameter::value_type("uri")),
            ),
            Media::Inline { data, media_type } => {
                let mut line = self.binary(identifier, data);
                if !media_type.is_empty() {
                    line.add_param(VCardParameter::type_param(media_type.as_str()));
                }
                self.push(line);
            }
        }
    }

    fn phone(&mut self, phone: &PhoneNumber) {
        let tokens: Vec<String> = types::phone_tokens(phone.phone_type)
            .map(String::from)
            .collect();
        let mut line = VCardLine::new("TEL", escape_text(&phone.number));
        if !tokens.is_empty() {
            line.add_param(VCardParameter::multi("TYPE", tokens));
        }
        self.push(line);
    }

    fn finish(self) -> VCard {
        self.card
    }
}
