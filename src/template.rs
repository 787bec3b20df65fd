use std::collections::BTreeMap;

use crate::{
    error::{OutforgeError, OutforgeResult},
    param::Value,
};

/// A parsed stat-block template.
///
/// Templates are plain text with `{identifier}` placeholders; `{{` and `}}`
/// are literal-brace escapes. There are no nested or conditional constructs.
#[derive(Clone, Debug)]
pub struct Template {
    segments: Vec<Segment>,
}

#[derive(Clone, Debug)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

impl Template {
    pub fn parse(text: &str) -> OutforgeResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(OutforgeError::malformed_template(format!(
                            "unclosed placeholder '{{{name}'"
                        )));
                    }
                    if !is_identifier(&name) {
                        return Err(OutforgeError::malformed_template(format!(
                            "invalid placeholder name '{name}'"
                        )));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(OutforgeError::malformed_template(
                            "single '}' outside a placeholder",
                        ));
                    }
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Substitute every placeholder from `vars`. Unknown-key references are
    /// rejected rather than passed through.
    pub fn render(&self, vars: &BTreeMap<String, Value>) -> OutforgeResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match vars.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => return Err(OutforgeError::missing_placeholder(name.clone())),
                },
            }
        }
        Ok(out)
    }

    /// Placeholder names in document order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn renders_placeholders_in_order() {
        let t = Template::parse("{name}: damage={damage}").unwrap();
        let out = t
            .render(&vars(&[
                ("name", Value::Text("A".to_string())),
                ("damage", Value::Int(8)),
            ]))
            .unwrap();
        assert_eq!(out, "A: damage=8");
    }

    #[test]
    fn doubled_braces_are_literals() {
        let t = Template::parse("{{not_a_key}} {name}").unwrap();
        let out = t
            .render(&vars(&[("name", Value::Text("B".to_string()))]))
            .unwrap();
        assert_eq!(out, "{not_a_key} B");
    }

    #[test]
    fn missing_key_is_rejected() {
        let t = Template::parse("{name} {price}").unwrap();
        let err = t
            .render(&vars(&[("name", Value::Text("C".to_string()))]))
            .unwrap_err();
        assert!(matches!(err, OutforgeError::MissingPlaceholder(key) if key == "price"));
    }

    #[test]
    fn malformed_syntax_is_rejected() {
        for text in ["{damage", "{}", "{bad name}", "{1damage}", "stray }"] {
            let err = Template::parse(text).unwrap_err();
            assert!(
                matches!(err, OutforgeError::MalformedTemplate(_)),
                "expected malformed template for {text:?}"
            );
        }
    }

    #[test]
    fn placeholders_lists_references() {
        let t = Template::parse("<o name=\"{name}\">{damage}/{damage}</o>").unwrap();
        let keys: Vec<&str> = t.placeholders().collect();
        assert_eq!(keys, ["name", "damage", "damage"]);
    }
}
