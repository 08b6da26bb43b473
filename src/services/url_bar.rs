// BrowseLighter URL bar
// The bottom panel is a small HTML document in its own webview: a single-line
// input and a "Go" button. Both post IPC messages back to the window; the
// window owns what happens next.

use serde::Deserialize;

use crate::types::navigation::Key;

/// Fixed positions of the panel's widgets, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub input_left: f64,
    pub input_top: f64,
    pub input_width: f64,
    /// Gap between the input's right edge and the button.
    pub button_gap: f64,
    pub button_top: f64,
    pub button_width: f64,
    pub font_size_pt: f64,
}

impl BarLayout {
    pub fn button_left(&self) -> f64 {
        self.input_left + self.input_width + self.button_gap
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            input_left: 5.0,
            input_top: 3.0,
            input_width: 700.0,
            button_gap: 5.0,
            button_top: 1.0,
            button_width: 50.0,
            font_size_pt: 9.0,
        }
    }
}

/// Messages posted by the bar document through `window.ipc.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BarMessage {
    /// The Go button was activated.
    Go { text: String },
    /// A key was pressed in the input. Only Enter is forwarded.
    KeyDown { key: String, text: String },
}

impl BarMessage {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Input text at the time the message was posted.
    pub fn text(&self) -> &str {
        match self {
            BarMessage::Go { text } | BarMessage::KeyDown { text, .. } => text,
        }
    }

    pub fn key(&self) -> Option<Key> {
        match self {
            BarMessage::KeyDown { key, .. } => Some(Key::from_dom(key)),
            BarMessage::Go { .. } => None,
        }
    }
}

const BAR_JS: &str = r#"
var input=document.getElementById('url');
var go=document.getElementById('go');
function post(m){if(window.ipc)window.ipc.postMessage(JSON.stringify(m))}
go.addEventListener('click',function(){post({cmd:'go',text:input.value})});
input.addEventListener('keydown',function(e){
  if(e.key==='Enter'){
    e.preventDefault();
    post({cmd:'key_down',key:'Enter',text:input.value});
  }
});
"#;

/// Builds the bar document for `layout`.
pub fn url_bar_html(layout: &BarLayout) -> String {
    let css = format!(
        "html,body{{margin:0;padding:0;overflow:hidden;background:#f0f0f0}}\
body{{position:relative;height:100vh;font:{font}pt 'Segoe UI',sans-serif}}\
#url{{position:absolute;left:{il}px;top:{it}px;width:{iw}px;box-sizing:border-box;font:inherit}}\
#go{{position:absolute;left:{bl}px;top:{bt}px;width:{bw}px;font:inherit;appearance:auto}}",
        font = layout.font_size_pt,
        il = layout.input_left,
        it = layout.input_top,
        iw = layout.input_width,
        bl = layout.button_left(),
        bt = layout.button_top,
        bw = layout.button_width,
    );

    let mut html = String::with_capacity(css.len() + BAR_JS.len() + 300);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(&css);
    html.push_str("</style></head><body>");
    html.push_str("<input id=\"url\" type=\"text\" spellcheck=\"false\" autocomplete=\"off\" autofocus>");
    html.push_str("<button id=\"go\" type=\"button\">Go</button>");
    html.push_str("<script>");
    html.push_str(BAR_JS);
    html.push_str("</script></body></html>");
    html
}
