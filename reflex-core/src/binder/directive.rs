//! Directive recognition.
//!
//! Four forms are recognised:
//!
//! | Form | Where |
//! |---|---|
//! | `{{ name }}` | whole text of a text node, surrounding whitespace ignored |
//! | `v-model="name"` | attribute |
//! | `v-bind:<attr>="name"` | attribute |
//! | `v-on:<event>="method"` | attribute |
//!
//! Anything else is not a directive. Malformed forms (an empty `v-bind:`
//! suffix, text around the braces, a name containing whitespace) are
//! ignored rather than reported.

const MODEL: &str = "v-model";
const BIND_PREFIX: &str = "v-bind:";
const ON_PREFIX: &str = "v-on:";

/// A binding parsed from a text node or an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Render `data[name]` as the text of the node.
    Interpolation { name: String },
    /// Keep the value property and `data[name]` in sync both ways.
    Model { name: String },
    /// Render `data[name]` into attribute `attr`.
    Bind { attr: String, name: String },
    /// Invoke `method` whenever `event` fires.
    On { event: String, method: String },
}

impl Directive {
    /// Parse the content of a text node.
    ///
    /// Only a single interpolation spanning the whole trimmed text matches.
    pub fn parse_text(text: &str) -> Option<Self> {
        let inner = text
            .trim()
            .strip_prefix("{{")?
            .strip_suffix("}}")?;

        let name = inner.trim();
        let valid = !name.is_empty()
            && !name
                .chars()
                .any(|c| c.is_whitespace() || c == '{' || c == '}');

        valid.then(|| Directive::Interpolation {
            name: name.to_owned(),
        })
    }

    /// Parse one attribute of an element.
    ///
    /// Attribute values are taken verbatim; a name that does not exist in
    /// the data simply reads as absent.
    pub fn parse_attribute(name: &str, value: &str) -> Option<Self> {
        if name == MODEL {
            return Some(Directive::Model {
                name: value.to_owned(),
            });
        }

        if let Some(attr) = name.strip_prefix(BIND_PREFIX).filter(|a| !a.is_empty()) {
            return Some(Directive::Bind {
                attr: attr.to_owned(),
                name: value.to_owned(),
            });
        }

        if let Some(event) = name.strip_prefix(ON_PREFIX).filter(|e| !e.is_empty()) {
            return Some(Directive::On {
                event: event.to_owned(),
                method: value.to_owned(),
            });
        }

        None
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Directive::Interpolation { .. } => "interpolation",
            Directive::Model { .. } => MODEL,
            Directive::Bind { .. } => "v-bind",
            Directive::On { .. } => "v-on",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpolation(name: &str) -> Option<Directive> {
        Some(Directive::Interpolation {
            name: name.to_owned(),
        })
    }

    #[test]
    fn interpolation_matches_whole_trimmed_text() {
        assert_eq!(Directive::parse_text("{{name}}"), interpolation("name"));
        assert_eq!(Directive::parse_text("  {{ name }}\n"), interpolation("name"));
        assert_eq!(Directive::parse_text("{{a.b}}"), interpolation("a.b"));
    }

    #[test]
    fn interpolation_rejects_partial_or_malformed_text() {
        for text in [
            "{{name}} and more",
            "Hello {{name}}",
            "{{}}",
            "{{   }}",
            "{{first name}}",
            "{{a}} {{b}}",
            "{name}",
            "plain text",
            "",
        ] {
            assert_eq!(Directive::parse_text(text), None, "matched {text:?}");
        }
    }

    #[test]
    fn attribute_directives() {
        assert_eq!(
            Directive::parse_attribute("v-model", "message"),
            Some(Directive::Model {
                name: "message".to_owned()
            })
        );
        assert_eq!(
            Directive::parse_attribute("v-bind:title", "tip"),
            Some(Directive::Bind {
                attr: "title".to_owned(),
                name: "tip".to_owned()
            })
        );
        assert_eq!(
            Directive::parse_attribute("v-on:click", "greet"),
            Some(Directive::On {
                event: "click".to_owned(),
                method: "greet".to_owned()
            })
        );
    }

    #[test]
    fn plain_and_empty_suffix_attributes_are_ignored() {
        assert_eq!(Directive::parse_attribute("id", "app"), None);
        assert_eq!(Directive::parse_attribute("v-bind:", "x"), None);
        assert_eq!(Directive::parse_attribute("v-on:", "x"), None);
        assert_eq!(Directive::parse_attribute("v-models", "x"), None);
        assert_eq!(Directive::parse_attribute("v-bind", "x"), None);
    }

    #[test]
    fn kinds_label_directives() {
        let bind = Directive::parse_attribute("v-bind:href", "url").unwrap();
        assert_eq!(bind.kind(), "v-bind");
        assert_eq!(interpolation("x").unwrap().kind(), "interpolation");
    }
}
