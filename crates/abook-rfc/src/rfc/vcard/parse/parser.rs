//! vCard document parser.
//!
//! Splits a text blob into cards with a two-state machine (outside a card,
//! inside a card body) and assembles logical lines from physical ones.

use super::error::{ParseError, ParseResult};
use super::lexer::{declared_encoding, parse_content_line, physical_lines};
use crate::rfc::vcard::codec::escape_text;
use crate::rfc::vcard::core::{VCard, VCardValue, VCardVersion, names};

const BEGIN_VCARD: &str = "BEGIN:VCARD";
const END_VCARD: &str = "END:VCARD";

/// Parses every complete card in the input, in encounter order.
///
/// Never fails: text outside cards is skipped, malformed lines are dropped
/// with a warning and a trailing card without `END:VCARD` is discarded.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Vec<VCard> {
    tracing::debug!("Parsing vCard input");

    let lines = physical_lines(input);
    tracing::trace!(count = lines.len(), "Split physical lines");

    let mut parser = Parser::default();
    for (line_num, raw) in lines {
        parser.feed(line_num, raw);
    }
    let cards = parser.finish();

    tracing::debug!(count = cards.len(), "vCard input parsed");
    cards
}

/// Parses the first complete card in the input.
///
/// ## Errors
///
/// Returns an error if the input holds no complete card.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    parse(input)
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::no_card(physical_lines(input).len().max(1)))
}

#[derive(Default)]
enum State {
    #[default]
    ExpectBegin,
    InBody(Body),
}

#[derive(Default)]
struct Parser {
    state: State,
    cards: Vec<VCard>,
}

impl Parser {
    fn feed(&mut self, line_num: usize, raw: &str) {
        match &mut self.state {
            State::ExpectBegin => {
                if is_marker(raw, BEGIN_VCARD) {
                    tracing::trace!(line = line_num, "Card started");
                    self.state = State::InBody(Body::new(line_num));
                } else if !raw.trim().is_empty() {
                    tracing::trace!(line = line_num, "Skipping text outside a card");
                }
            }
            State::InBody(body) => match body.feed(line_num, raw) {
                Step::Continue => {}
                Step::Finished => {
                    if let State::InBody(body) = std::mem::take(&mut self.state) {
                        self.cards.push(body.finish());
                    }
                }
                Step::Restart => {
                    tracing::warn!(
                        line = body.start,
                        "Card not terminated before next BEGIN:VCARD, discarding it"
                    );
                    self.state = State::InBody(Body::new(line_num));
                }
            },
        }
    }

    fn finish(self) -> Vec<VCard> {
        if let State::InBody(body) = &self.state {
            tracing::warn!(line = body.start, "Discarding unterminated card");
        }
        self.cards
    }
}

enum Step {
    Continue,
    Finished,
    Restart,
}

/// Body of the card currently being read.
struct Body {
    card: VCard,
    start: usize,
    pending: Option<PendingLine>,
    nested: Option<NestedCard>,
    last_key: Option<String>,
}

impl Body {
    fn new(start: usize) -> Self {
        Self {
            card: VCard::default(),
            start,
            pending: None,
            nested: None,
            last_key: None,
        }
    }

    fn feed(&mut self, line_num: usize, raw: &str) -> Step {
        if let Some(nested) = &mut self.nested {
            nested.lines.push(raw.to_string());
            if is_marker(raw, BEGIN_VCARD) {
                nested.depth += 1;
            } else if is_marker(raw, END_VCARD) {
                nested.depth -= 1;
                if nested.depth == 0
                    && let Some(nested) = self.nested.take()
                {
                    self.attach_nested(&nested);
                }
            }
            return Step::Continue;
        }

        if let Some(pending) = &mut self.pending {
            if pending.wants_soft_break() && !is_marker(raw, END_VCARD) {
                pending.text.pop();
                pending.text.push_str(raw);
                return Step::Continue;
            }
            if let Some(rest) = raw.strip_prefix([' ', '\t']) {
                pending.text.push_str(rest);
                return Step::Continue;
            }
            if pending.is_base64() && !raw.trim().is_empty() && !raw.contains(':') {
                pending.text.push_str(raw.trim());
                return Step::Continue;
            }
        }

        self.flush();

        if raw.trim().is_empty() {
            return Step::Continue;
        }
        if is_marker(raw, END_VCARD) {
            return Step::Finished;
        }
        if is_marker(raw, BEGIN_VCARD) {
            if self.last_key.as_deref() != Some("agent") {
                return Step::Restart;
            }
            tracing::trace!(line = line_num, "Capturing nested agent card");
            self.nested = Some(NestedCard {
                depth: 1,
                lines: vec![raw.to_string()],
            });
            return Step::Continue;
        }

        self.pending = Some(PendingLine {
            line_num,
            text: raw.to_string(),
        });
        Step::Continue
    }

    /// Parses the pending logical line and adds it to the card.
    fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let line = match parse_content_line(&pending.text, pending.line_num) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = e.line, error = %e, "Skipping malformed line");
                return;
            }
        };

        let key = line.key();
        if key == "version" {
            let text = line.value.as_text().unwrap_or_default();
            self.card.version = VCardVersion::parse(text).unwrap_or_else(|| {
                tracing::warn!(version = text, "Unknown vCard version, assuming 3.0");
                VCardVersion::V3_0
            });
        }
        tracing::trace!(line = pending.line_num, identifier = %line.identifier, "Parsed line");

        self.card.add_line(line);
        self.last_key = Some(key);
    }

    /// Stores a nested card as the escaped value of the preceding AGENT line.
    fn attach_nested(&mut self, nested: &NestedCard) {
        let Some(agent) = self.card.last_mut("agent") else {
            return;
        };
        agent.value = VCardValue::Text(escape_text(&nested.lines.join("\n")));
    }

    fn finish(mut self) -> VCard {
        self.flush();
        self.card
    }
}

/// A logical line assembled from one or more physical lines.
struct PendingLine {
    line_num: usize,
    text: String,
}

impl PendingLine {
    fn is_base64(&self) -> bool {
        matches!(
            declared_encoding(&self.text).as_deref(),
            Some(names::B | names::BASE64)
        )
    }

    /// A quoted-printable value ending in `=` continues on the next line.
    fn wants_soft_break(&self) -> bool {
        self.text.ends_with('=')
            && declared_encoding(&self.text).as_deref() == Some(names::QUOTED_PRINTABLE)
    }
}

/// Raw lines of a nested 2.1 agent card.
struct NestedCard {
    depth: usize,
    lines: Vec<String>,
}

fn is_marker(raw: &str, marker: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(marker)
}
