use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    sanitized: Option<bool>,
    max_input_len: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    truncated: bool,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> Result<JsValue, JsValue> {
    render_html_with_options(source, JsValue::UNDEFINED)
}

/// `options` accepts `{ sanitized?: boolean, maxInputLen?: number }`; a `maxInputLen` of 0
/// disables the length limit.
#[wasm_bindgen]
pub fn render_html_with_options(source: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let output = chatmark_core::render_with_options(source, &options);
    let result = RenderResult {
        html: output.html,
        truncated: output.truncated,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn format_inline(line: &str) -> String {
    chatmark_core::format_inline(line)
}

fn options_from_js(value: JsValue) -> Result<chatmark_core::RenderOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(chatmark_core::RenderOptions::default());
    }
    let parsed: RenderOptions =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(merge_options(parsed))
}

fn merge_options(parsed: RenderOptions) -> chatmark_core::RenderOptions {
    let mut out = chatmark_core::RenderOptions::default();
    if let Some(sanitized) = parsed.sanitized {
        out.sanitize = sanitized;
    }
    if let Some(limit) = parsed.max_input_len {
        out.max_input_len = (limit > 0).then_some(limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{RenderOptions, format_inline, merge_options};

    #[test]
    fn missing_fields_keep_defaults() {
        let merged = merge_options(RenderOptions {
            sanitized: None,
            max_input_len: None,
        });
        assert_eq!(merged, chatmark_core::RenderOptions::default());
    }

    #[test]
    fn zero_limit_disables_truncation() {
        let merged = merge_options(RenderOptions {
            sanitized: Some(true),
            max_input_len: Some(0),
        });
        assert!(merged.sanitize);
        assert_eq!(merged.max_input_len, None);
    }

    #[test]
    fn inline_export_matches_core() {
        assert_eq!(format_inline("`x`"), "<span class=\"inline-code\">x</span>");
    }
}
