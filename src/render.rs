//! Card page rendering.
//!
//! One fixed HTML template, parsed once when the [`Renderer`] is built.
//! The page carries Twitter summary-card metadata so links unfurl with the
//! card's name, rules text and artwork.

use minijinja::{AutoEscape, Environment, Output, State, Value, escape_formatter};

use crate::card::CardPage;

/// Template name inside the environment. The `.html` suffix switches on
/// HTML auto-escaping for every interpolated value.
const TEMPLATE_NAME: &str = "card.html";

/// The card page markup. Field access follows [`CardPage`]'s serialized
/// shape: `card.name`, `card.text`, `edition.image_url`.
pub const CARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta name="twitter:card" content="summary" />
    <meta name="twitter:site" content="@wizards_magic" />
    <meta name="twitter:title" content="{{ card.name }}" />
    <meta name="twitter:description" content="{{ card.text }}" />
    <meta name="twitter:image" content="{{ edition.image_url }}" />
  </head>
  <body>
    <h1>{{ card.name }}</h1>
    <img src="{{ edition.image_url }}" alt="{{ card.name }}" />
  </body>
</html>
"#;

/// Renders [`CardPage`]s through a template environment prepared up front.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Build a renderer around the standard card template.
    ///
    /// Fails only if the template does not parse, which callers treat as
    /// fatal at startup.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::with_template(CARD_TEMPLATE)
    }

    /// Build a renderer around an arbitrary template source.
    pub fn with_template(source: &str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_formatter(format_value);
        env.add_template_owned(TEMPLATE_NAME, source.to_string())?;
        Ok(Self { env })
    }

    /// Render the card page to an HTML string.
    pub fn render_card(&self, page: &CardPage) -> Result<String, minijinja::Error> {
        self.env.get_template(TEMPLATE_NAME)?.render(page)
    }
}

/// Formatter for interpolated values: strings in HTML context go through
/// [`write_html_escaped`]; everything else defers to the engine default.
fn format_value(out: &mut Output, state: &State, value: &Value) -> Result<(), minijinja::Error> {
    if matches!(state.auto_escape(), AutoEscape::Html)
        && !value.is_safe()
        && let Some(s) = value.as_str()
    {
        return write_html_escaped(out, s);
    }
    escape_formatter(out, state, value)
}

/// HTML-escape a string into the output. Escapes `&`, `<`, `>`, `"` and
/// `'`; `/` stays literal, so URLs render unchanged inside attributes.
fn write_html_escaped(out: &mut Output, s: &str) -> Result<(), minijinja::Error> {
    let mut rest = s;
    while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
        out.write_str(&rest[..pos])?;
        out.write_str(match rest.as_bytes()[pos] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => "&#x27;",
        })?;
        rest = &rest[pos + 1..];
    }
    out.write_str(rest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Edition};

    fn sample_page() -> CardPage {
        CardPage {
            card: Card {
                name: "Shivan Dragon".to_string(),
                text: "Flying".to_string(),
                editions: Vec::new(),
            },
            edition: Edition {
                multiverse_id: 175,
                set: "Limited Edition Alpha".to_string(),
                image_url: "https://example.com/shivan.png".to_string(),
            },
        }
    }

    #[test]
    fn renders_card_fields_into_page() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_card(&sample_page()).unwrap();

        assert!(html.contains("<h1>Shivan Dragon</h1>"));
        assert!(html.contains(r#"content="Flying""#));
        assert!(html.contains(r#"<meta name="twitter:site" content="@wizards_magic" />"#));
    }

    #[test]
    fn image_url_appears_in_meta_and_img() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_card(&sample_page()).unwrap();

        let occurrences = html.matches("https://example.com/shivan.png").count();
        assert_eq!(occurrences, 2);
    }

    #[test]
    fn image_url_slashes_are_not_escaped() {
        let renderer = Renderer::new().unwrap();
        let mut page = sample_page();
        page.edition.image_url =
            "https://gatherer.wizards.com/Handlers/Image.ashx?multiverseid=175&type=card"
                .to_string();

        let html = renderer.render_card(&page).unwrap();
        assert!(html.contains(
            "https://gatherer.wizards.com/Handlers/Image.ashx?multiverseid=175&amp;type=card"
        ));
        assert!(!html.contains("&#x2f;"));
    }

    #[test]
    fn quotes_in_fields_cannot_break_attributes() {
        let renderer = Renderer::new().unwrap();
        let mut page = sample_page();
        page.card.name = r#""Ach! Hans, Run!""#.to_string();
        page.card.text = "Gaea's blessing".to_string();

        let html = renderer.render_card(&page).unwrap();
        assert!(html.contains("&quot;Ach! Hans, Run!&quot;"));
        assert!(html.contains("Gaea&#x27;s blessing"));
        assert!(!html.contains(r#"alt="""#));
    }

    #[test]
    fn escapes_html_in_card_fields() {
        let renderer = Renderer::new().unwrap();
        let mut page = sample_page();
        page.card.name = "<script>alert(1)</script>".to_string();
        page.card.text = "Sacrifice a land: add {B} & draw a card.".to_string();

        let html = renderer.render_card(&page).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; draw a card."));
    }

    #[test]
    fn default_edition_renders_empty_image_url() {
        let renderer = Renderer::new().unwrap();
        let mut page = sample_page();
        page.edition = Edition::default();

        let html = renderer.render_card(&page).unwrap();
        assert!(html.contains(r#"<img src="" alt="Shivan Dragon" />"#));
    }

    #[test]
    fn malformed_template_fails_to_parse() {
        assert!(Renderer::with_template("{{ card.name").is_err());
    }

    #[test]
    fn template_calling_unknown_function_fails_at_render() {
        let renderer = Renderer::with_template("{{ boom() }}").unwrap();
        assert!(renderer.render_card(&sample_page()).is_err());
    }
}
