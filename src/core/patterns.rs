//! Pattern catalog.
//!
//! All matchers are compiled once into a [`Catalog`] and every query runs a
//! fresh `find_iter`/`captures_iter`, so no search position is ever carried
//! from one input string to the next.
//!
//! The literal alphabet is: any character above U+00FF ("foreign"), ASCII
//! letters and digits, and the whitelist (default `.©×-_!, `). A literal
//! must contain at least one foreign character that is not whitelisted.

use regex::Regex;

use super::{data::RawMatch, error::ScanError};

/// Punctuation allowed inside a literal run besides letters and digits.
pub const DEFAULT_LITERAL_WHITELIST: &str = ".©×-_!, ";

/// Trailing call-open that marks a literal as already translated.
pub const DEFAULT_I18N_CALL_PREFIX: &str = r"t\s*\(\s*$";

/// Key of the component options block scanned for literals.
pub const PROPS_BLOCK: &str = "props";

const CALL_SITE: &str = r#"[$.]t\(['"](.+?)['"]"#;
const TEMPLATE: &str = r"(?i)<template(?:\s[^>]*)?>([\s\S]+)</template>";
const SCRIPT_PREAMBLE: &str = r"(?i)<script(?:\s[^>]*)?>([\s\S]*?)export\s*default";
const START_TAG: &str = r#"<(?:[-A-Za-z0-9_]+)((?:\s+[a-zA-Z_:@][-a-zA-Z0-9_:.]*(?:\s*=\s*(?:(?:"[^"]*")|(?:'[^']*')|[^>\s]+))?)*)\s*(?:/?)>"#;
const ATTRIBUTE: &str = r#"([@:a-zA-Z_][-a-zA-Z0-9_.]*)(?:\s*=\s*(?:(?:"((?:\\.|[^"'])*)")|(?:'((?:\\.|[^'"])*)')))"#;

/// A `name="value"` pair found inside a start tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: RawMatch<'a>,
}

impl Attribute<'_> {
    /// Bound (`:x`, `v-bind:x`) and event (`@x`, `v-on:x`) attributes hold
    /// script expressions rather than plain text.
    pub fn is_expression(&self) -> bool {
        self.name.starts_with(':') || self.name.starts_with('@') || self.name.starts_with("v-")
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    literal: Regex,
    literal_test: Regex,
    foreign: Regex,
    quoted: Regex,
    call_site: Regex,
    tag_content: Regex,
    start_tag: Regex,
    attribute: Regex,
    template: Regex,
    script_preamble: Regex,
}

impl Catalog {
    /// Builds the catalog for a literal whitelist. Braces are never part of
    /// the alphabet, even if listed.
    pub fn new(whitelist: &str) -> Result<Self, ScanError> {
        let members: String = whitelist
            .chars()
            .filter(|c| !matches!(c, '{' | '}'))
            .map(escape_class_char)
            .collect();
        let high: String = whitelist
            .chars()
            .filter(|c| u32::from(*c) > 0xff)
            .map(escape_class_char)
            .collect();

        let foreign = if high.is_empty() {
            r"[^\x00-\xff]".to_string()
        } else {
            format!(r"[[^\x00-\xff]--[{high}]]")
        };
        let body = format!(r"[[^\x00-\xff]A-Za-z0-9{members}]");
        let quoted_inner = format!("{foreign}{body}*");

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| ScanError::invalid_pattern("literal", whitelist, e))
        };

        Ok(Self {
            literal: compile(&format!("{foreign}{body}*"))?,
            literal_test: compile(&format!("^{body}+$"))?,
            quoted: compile(&format!(r#""({quoted_inner})"|'({quoted_inner})'"#))?,
            tag_content: compile(&format!(r">((?:[^\x00-\xff]|[0-9{{}}A-Za-z\s{members}])+)<"))?,
            foreign: compile(&foreign)?,
            call_site: builtin(CALL_SITE),
            start_tag: builtin(START_TAG),
            attribute: builtin(ATTRIBUTE),
            template: builtin(TEMPLATE),
            script_preamble: builtin(SCRIPT_PREAMBLE),
        })
    }

    /// Maximal literal runs. A run starts at a foreign character.
    pub fn literal_runs<'a>(&self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
        self.literal
            .find_iter(text)
            .map(|m| RawMatch::whole(m.as_str(), m.start()))
    }

    /// Whole-string test: alphabet only, and at least one foreign character.
    pub fn is_literal(&self, text: &str) -> bool {
        self.literal_test.is_match(text) && self.foreign.is_match(text)
    }

    /// `"..."` and `'...'` strings whose content is a literal opening with a
    /// foreign character.
    pub fn quoted_literals<'a>(&self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
        self.quoted.captures_iter(text).filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1).or_else(|| caps.get(2))?;
            Some(RawMatch {
                matched: whole.as_str(),
                start: whole.start(),
                payload: inner.as_str(),
                payload_start: inner.start(),
            })
        })
    }

    /// Keys passed to `$t(...)` or `.t(...)`.
    pub fn i18n_calls<'a>(&self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
        captured(&self.call_site, text)
    }

    /// Text between a `>` and the next `<`.
    pub fn tag_contents<'a>(&self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
        captured(&self.tag_content, text)
    }

    /// Opening tags. The payload is the raw attribute list.
    pub fn start_tags<'a>(&self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
        captured(&self.start_tag, text)
    }

    /// Quoted attributes of a start tag's attribute list.
    pub fn attributes<'a>(&self, attrs: &'a str) -> impl Iterator<Item = Attribute<'a>> {
        self.attribute.captures_iter(attrs).filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            let value = caps.get(2).or_else(|| caps.get(3))?;
            Some(Attribute {
                name: name.as_str(),
                value: RawMatch {
                    matched: whole.as_str(),
                    start: whole.start(),
                    payload: value.as_str(),
                    payload_start: value.start(),
                },
            })
        })
    }

    pub fn template(&self) -> &Regex {
        &self.template
    }

    pub fn script_preamble(&self) -> &Regex {
        &self.script_preamble
    }
}

/// Pattern introducing a `key: {` options block.
pub fn named_block_intro(key: &str) -> Regex {
    builtin(&format!(r"(?i){}\s*:\s*\{{", regex::escape(key)))
}

fn captured<'a>(pattern: &Regex, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> {
    pattern.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(RawMatch {
            matched: whole.as_str(),
            start: whole.start(),
            payload: inner.as_str(),
            payload_start: inner.start(),
        })
    })
}

fn escape_class_char(c: char) -> String {
    match c {
        '\\' | '-' | '[' | ']' | '^' | '&' | '~' => format!("\\{c}"),
        _ => c.to_string(),
    }
}

fn builtin(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern compiles")
}
