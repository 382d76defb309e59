//! 印刷用ドキュメント（80mm 幅・等幅 12px の HTML）

use super::receipt::Receipt;

const TITLE: &str = "Ticket de Jugada";

/// チケット本文を印刷用 HTML に包む
pub fn render_print_html(receipt: &Receipt) -> String {
    format!(
        r#"<html>
  <head>
    <title>{title}</title>
    <style>
      body {{
        font-family: 'Courier New', monospace;
        font-size: 12px;
        width: 80mm;
        margin: 0;
        padding: 10px;
      }}
      pre {{
        white-space: pre-wrap;
        margin: 0;
      }}
    </style>
  </head>
  <body>
    <pre>{body}</pre>
  </body>
</html>
"#,
        title = TITLE,
        body = escape_html(receipt.as_str())
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
