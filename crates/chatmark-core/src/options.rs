use crate::block::render;
use crate::sanitize::sanitize_fragment;

/// Upper bound on input bytes rendered by default; WhatsApp caps messages at 65536 characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024;

pub const ENV_MAX_INPUT_LEN: &str = "CHATMARK_MAX_INPUT_LEN";
pub const ENV_SANITIZE: &str = "CHATMARK_SANITIZE";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Longest input, in bytes, that is rendered. `None` disables the limit.
    pub max_input_len: Option<usize>,
    /// Run the rendered fragment through the allow-list sanitizer.
    pub sanitize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            sanitize: false,
        }
    }
}

impl RenderOptions {
    /// Reads `CHATMARK_MAX_INPUT_LEN` and `CHATMARK_SANITIZE`, keeping defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();

        if let Some(value) = lookup(ENV_MAX_INPUT_LEN) {
            match parse_limit(&value) {
                Some(limit) => options.max_input_len = limit,
                None => log::warn!(
                    "ignoring {}={:?}: expected a byte count or `none`",
                    ENV_MAX_INPUT_LEN,
                    value
                ),
            }
        }

        if let Some(value) = lookup(ENV_SANITIZE) {
            match parse_flag(&value) {
                Some(flag) => options.sanitize = flag,
                None => log::warn!(
                    "ignoring {}={:?}: expected true or false",
                    ENV_SANITIZE,
                    value
                ),
            }
        }

        options
    }

    /// Cuts `source` to the configured limit at a char boundary.
    pub fn clamp<'a>(&self, source: &'a str) -> (&'a str, bool) {
        let Some(limit) = self.max_input_len else {
            return (source, false);
        };
        if source.len() <= limit {
            return (source, false);
        }
        let mut end = limit;
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        (&source[..end], true)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOutput {
    pub html: String,
    /// The input exceeded `max_input_len` and only its prefix was rendered.
    pub truncated: bool,
}

pub fn render_with_options(source: &str, options: &RenderOptions) -> RenderOutput {
    let (input, truncated) = options.clamp(source);
    if truncated {
        log::debug!(
            "message truncated from {} to {} bytes before rendering",
            source.len(),
            input.len()
        );
    }

    let html = render(input);
    let html = if options.sanitize {
        sanitize_fragment(&html)
    } else {
        html
    };
    RenderOutput { html, truncated }
}

fn parse_limit(value: &str) -> Option<Option<usize>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match value.parse::<usize>().ok()? {
        0 => Some(None),
        limit => Some(Some(limit)),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MAX_INPUT_LEN, RenderOptions, render_with_options};
    use std::collections::HashMap;

    fn options_from(pairs: &[(&str, &str)]) -> RenderOptions {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        RenderOptions::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let options = options_from(&[]);
        assert_eq!(options.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
        assert!(!options.sanitize);
    }

    #[test]
    fn environment_overrides_defaults() {
        let options = options_from(&[
            ("CHATMARK_MAX_INPUT_LEN", "128"),
            ("CHATMARK_SANITIZE", "true"),
        ]);
        assert_eq!(options.max_input_len, Some(128));
        assert!(options.sanitize);

        let options = options_from(&[("CHATMARK_MAX_INPUT_LEN", "none")]);
        assert_eq!(options.max_input_len, None);
        let options = options_from(&[("CHATMARK_MAX_INPUT_LEN", "0")]);
        assert_eq!(options.max_input_len, None);
    }

    #[test]
    fn invalid_environment_values_are_ignored() {
        let options = options_from(&[
            ("CHATMARK_MAX_INPUT_LEN", "lots"),
            ("CHATMARK_SANITIZE", "maybe"),
        ]);
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn clamps_on_char_boundary() {
        let options = RenderOptions {
            max_input_len: Some(2),
            ..Default::default()
        };
        assert_eq!(options.clamp("aé"), ("a", true));
        assert_eq!(options.clamp("ab"), ("ab", false));
    }

    #[test]
    fn truncated_input_is_reported() {
        let options = RenderOptions {
            max_input_len: Some(5),
            ..Default::default()
        };
        let output = render_with_options("*bold* text", &options);
        assert!(output.truncated);
        assert_eq!(output.html, "<p>*bold</p>");

        let output = render_with_options("*hi*", &options);
        assert!(!output.truncated);
        assert_eq!(output.html, "<p><b>hi</b></p>");
    }
}
