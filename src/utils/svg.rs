use std::borrow::Cow;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// Coordinates are f64 so uneven cell sizes keep their fraction.
pub struct SvgCanvas {
    size: u32,
    body: String,
}

impl SvgCanvas {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    pub fn fill(&mut self, color: &str) -> &mut Self {
        self.body.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            color
        ));
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) -> &mut Self {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            x, y, width, height, color
        ));
        self
    }

    pub fn centered_text(&mut self, content: &str, font_size: f64, color: &str) -> &mut Self {
        self.body.push_str(&format!(
            r#"<text x="50%" y="50%" font-family="Arial" font-size="{}px" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            font_size,
            color,
            escape_text(content)
        ));
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.body.push_str(&format!("<!-- {} -->", text));
        self
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="{ns}">{body}</svg>"#,
            size = self.size,
            ns = SVG_NAMESPACE,
            body = self.body
        )
    }
}

pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
