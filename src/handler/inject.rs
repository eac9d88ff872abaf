//! Content templating module
//!
//! Literal substring substitution only: a script block spliced in before the
//! closing head tag, and exact placeholder token replacement. Deliberately
//! not a template engine; tests pin the exact-match behavior.

use crate::config::InjectConfig;

/// Marker the injected script block is inserted before.
pub const HEAD_CLOSE: &str = "</head>";

/// Placeholder token replaced with the credential URL.
pub const URL_TOKEN: &str = "{{SUPABASE_URL}}";

/// Placeholder token replaced with the credential key.
pub const KEY_TOKEN: &str = "{{SUPABASE_ANON_KEY}}";

/// Insert the window-globals script block before the first `</head>`.
///
/// A document without the marker is returned unmodified; the caller still
/// serves it with a 200. Only the first occurrence anchors the insertion.
pub fn inject_into_head(html: &str, inject: &InjectConfig) -> String {
    match html.find(HEAD_CLOSE) {
        Some(pos) => {
            let block = window_globals_block(inject);
            let mut out = String::with_capacity(html.len() + block.len());
            out.push_str(&html[..pos]);
            out.push_str(&block);
            out.push_str(&html[pos..]);
            out
        }
        None => html.to_string(),
    }
}

/// Replace every occurrence of both placeholder tokens. Single pass per token.
pub fn substitute_tokens(source: &str, inject: &InjectConfig) -> String {
    source
        .replace(URL_TOKEN, &inject.supabase_url)
        .replace(KEY_TOKEN, &inject.supabase_anon_key)
}

/// Render the `<script>` block exposing the credentials as window globals.
fn window_globals_block(inject: &InjectConfig) -> String {
    format!(
        "\n    <script>\n        \
         // Runtime configuration injected by the server\n        \
         window.SUPABASE_URL = '{}';\n        \
         window.SUPABASE_ANON_KEY = '{}';\n    </script>\n",
        inject.supabase_url, inject.supabase_anon_key
    )
}
