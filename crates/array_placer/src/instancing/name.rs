//! Name templates for generated instances.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// A template such as `"{name}_{index}"`.
///
/// `{name}` becomes the prototype name and `{index}` the 1-based index padded to two digits.
/// Any other text, including unknown `{...}` tokens, is copied verbatim.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    pub template: String,
}

impl Default for NameTemplate {
    fn default() -> Self {
        Self::new("{name}_{index}")
    }
}

impl NameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute placeholders in a single left-to-right pass, so text inserted for `{name}`
    /// is never rescanned.
    pub fn format(&self, name: &str, index: usize) -> String {
        let mut out = String::with_capacity(self.template.len() + name.len() + 2);
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
                out.push_str(name);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(INDEX_PLACEHOLDER) {
                out.push_str(&format!("{index:02}"));
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_pads_index() {
        let t = NameTemplate::default();
        assert_eq!(t.format("Tree", 1), "Tree_01");
        assert_eq!(t.format("Tree", 12), "Tree_12");
        assert_eq!(t.format("Tree", 123), "Tree_123");
    }

    #[test]
    fn unknown_tokens_are_copied() {
        let t = NameTemplate::new("{kind}-{name}{index}{");
        assert_eq!(t.format("Rock", 3), "{kind}-Rock03{");
    }

    #[test]
    fn inserted_name_is_not_rescanned() {
        let t = NameTemplate::new("{name}#{index}");
        assert_eq!(t.format("odd{index}", 4), "odd{index}#04");
    }

    #[test]
    fn formatting_sequential_indices_is_reproducible() {
        let t = NameTemplate::new("{index}:{name}");
        let first: Vec<String> = (1..=5).map(|i| t.format("Lamp", i)).collect();
        let second: Vec<String> = (1..=5).map(|i| t.format("Lamp", i)).collect();
        assert_eq!(first, second);
        assert_eq!(first[4], "05:Lamp");
    }
}
