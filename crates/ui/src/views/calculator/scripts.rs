use dioxus::document::eval;

/// Show a blocking `alert()` in the webview.
pub async fn show_alert(message: &str) {
    let script = alert_script(message);
    let _ = eval(&script).await;
}

fn alert_script(message: &str) -> String {
    format!("alert({});", js_string_literal(message))
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
