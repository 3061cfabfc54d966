// src/parse/query.rs
// =============================================================================
// TagQuery describes the element we are looking for: a tag name plus any
// number of attribute conditions. It replaces ad hoc CSS selector strings so
// every search in the crate reads the same way and prints the same way when
// it fails.
//
// Example:
//   TagQuery::new("div").attr("class", "toctree-wrapper")
//   TagQuery::new("a").attr_pattern("href", r".+pdf-a4\.zip$")?
// =============================================================================

use std::fmt;

use regex::Regex;

use super::node::Node;
use crate::error::Result;

/// How an attribute value is compared
#[derive(Debug, Clone)]
pub enum AttrMatcher {
    /// The value must equal this string.
    /// For `class` a single class token is also enough.
    Exact(String),
    /// The pattern must match somewhere in the value
    Pattern(Regex),
}

impl AttrMatcher {
    fn matches(&self, name: &str, value: &str) -> bool {
        match self {
            AttrMatcher::Exact(expected) => {
                value == expected
                    || (name == "class" && value.split_whitespace().any(|class| class == expected))
            }
            AttrMatcher::Pattern(pattern) => pattern.is_match(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagQuery {
    tag: String,
    attrs: Vec<(String, AttrMatcher)>,
}

impl TagQuery {
    pub fn new(tag: &str) -> Self {
        TagQuery {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Requires `name` to equal `value`
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .push((name.to_string(), AttrMatcher::Exact(value.to_string())));
        self
    }

    /// Requires `name` to match the regular expression `pattern`
    pub fn attr_pattern(mut self, name: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        self.attrs
            .push((name.to_string(), AttrMatcher::Pattern(regex)));
        Ok(self)
    }

    /// True when the node has our tag name and satisfies every attribute
    /// condition. A missing attribute never matches.
    pub fn matches<N: Node>(&self, node: &N) -> bool {
        node.tag_name() == self.tag
            && self.attrs.iter().all(|(name, matcher)| {
                node.attr(name)
                    .map(|value| matcher.matches(name, value))
                    .unwrap_or(false)
            })
    }
}

// Renders like a CSS selector so error messages are easy to read:
// div[class="toctree-wrapper"], a[href~/.+pdf-a4\.zip$/]
impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        for (name, matcher) in &self.attrs {
            match matcher {
                AttrMatcher::Exact(value) => write!(f, "[{}=\"{}\"]", name, value)?,
                AttrMatcher::Pattern(pattern) => write!(f, "[{}~/{}/]", name, pattern.as_str())?,
            }
        }
        Ok(())
    }
}
