mod block;
mod cache;
mod delimiter;
mod escape;
mod inline;
mod options;
mod sanitize;

pub use block::render;
pub use cache::{clear_render_cache, render_cached};
pub use delimiter::{Delimiter, tag_for};
pub use escape::escape_html;
pub use inline::format_inline;
pub use options::{
    DEFAULT_MAX_INPUT_LEN, ENV_MAX_INPUT_LEN, ENV_SANITIZE, RenderOptions, RenderOutput,
    render_with_options,
};
pub use sanitize::render_sanitized;
