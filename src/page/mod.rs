//! Full HTML page: prompt, input field and the conditional embed container

use crate::embed::{escape_attr, EmbedState, FRAME_HEIGHT};

/// Prompt shown above the input field
pub const SUBHEADER: &str = "🎥 Enter YouTube Video ID:";

/// Visible label of the input field
pub const INPUT_LABEL: &str = "Video Link ID";

/// Form field name; also the query parameter the server reads
pub const INPUT_KEY: &str = "linkid";

/// Height of the box the player sits in
pub const CONTAINER_HEIGHT: u32 = FRAME_HEIGHT;

/// Render the complete page for the current input value.
///
/// The input is echoed back into the text field so the value survives the
/// round trip, and the embed container is only emitted for non-empty input.
pub fn render_page(input: &str) -> String {
    let mut body = String::new();
    body.push_str(&format!("    <h3>{}</h3>\n", SUBHEADER));
    body.push_str(&render_input(input));

    if let Some(fragment) = EmbedState::from_input(input).render() {
        body.push_str(&render_container(&fragment));
    }

    format!("{}{}{}", PAGE_HEAD, body, PAGE_TAIL)
}

fn render_input(input: &str) -> String {
    format!(
        concat!(
            "    <form method=\"get\" action=\"/\">\n",
            "        <label for=\"{key}\">{label}</label>\n",
            "        <input type=\"text\" id=\"{key}\" name=\"{key}\" value=\"{value}\" autocomplete=\"off\">\n",
            "    </form>\n"
        ),
        key = INPUT_KEY,
        label = INPUT_LABEL,
        value = escape_attr(input),
    )
}

fn render_container(fragment: &str) -> String {
    format!(
        "    <div class=\"embed\" style=\"height:{}px\">\n        {}\n    </div>\n",
        CONTAINER_HEIGHT, fragment
    )
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>YouTube Embed</title>
    <style>
        body { font-family: sans-serif; padding: 20px; }
        label { display: block; margin-bottom: 6px; }
        input { width: 400px; padding: 8px; }
        .embed { margin-top: 16px; overflow: hidden; }
    </style>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";
