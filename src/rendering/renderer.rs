//! Fragment rendering and the output envelope
//!
//! Each classified token renders to one fragment independently of its
//! neighbours; fragments are joined in order and the joined body is
//! wrapped according to the output format.

use super::style::Style;
use crate::engine::config::{HighlighterConfig, OutputFormat, StopwordBehavior};
use crate::reading::classify::{Category, ClassifiedToken};

/// Renders one classified token.
pub fn render_token(token: &ClassifiedToken<'_>, config: &HighlighterConfig) -> String {
    let format = config.output_format();
    let text = token.text;

    match token.category {
        Category::Separator | Category::Plain { split: None } => text.to_string(),
        Category::Rare if config.style_rare_words() => {
            config.rare_word_behavior().style().apply(text, format)
        }
        Category::Rare => text.to_string(),
        // A styled stopword is wrapped whole, never split into a styled
        // prefix and a plain suffix.
        Category::Stopword => match config.stopword_behavior() {
            StopwordBehavior::Remove => String::new(),
            behavior => match behavior.style() {
                Some(style) => style.apply(text, format),
                None => text.to_string(),
            },
        },
        Category::Plain { split: Some(split) } => {
            let (prefix, suffix) = text.split_at(split);
            if prefix.is_empty() {
                return suffix.to_string();
            }
            let mut fragment = Style::Bold.apply(prefix, format);
            fragment.push_str(suffix);
            fragment
        }
    }
}

/// Renders every token and joins the fragments in their original order.
pub fn render_body(tokens: &[ClassifiedToken<'_>], config: &HighlighterConfig) -> String {
    tokens
        .iter()
        .map(|token| render_token(token, config))
        .collect()
}

/// Wraps a rendered body for the output format.
///
/// HTML gets a minimal document whose style rule sets the weight of
/// `<b>` from the opacity; the other formats are returned as-is.
pub fn envelope(body: String, config: &HighlighterConfig) -> String {
    match config.output_format() {
        OutputFormat::Html => format!(
            "<!DOCTYPE html><html><head><style>b {{font-weight: {}}}</style></head><body><p>{}</p></body></html>",
            config.font_weight(),
            body
        ),
        OutputFormat::Terminal | OutputFormat::Text => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::RareWordBehavior;

    fn token(text: &str, category: Category) -> ClassifiedToken<'_> {
        ClassifiedToken { text, category }
    }

    fn config(format: OutputFormat, behavior: StopwordBehavior) -> HighlighterConfig {
        HighlighterConfig::builder()
            .output_format(format)
            .stopword_behavior(behavior)
            .build()
            .unwrap()
    }

    #[test]
    fn test_separator_passes_through() {
        let config = config(OutputFormat::Html, StopwordBehavior::Keep);
        assert_eq!(render_token(&token(" ", Category::Separator), &config), " ");
    }

    #[test]
    fn test_plain_with_fixation() {
        let html = config(OutputFormat::Html, StopwordBehavior::Keep);
        let terminal = config(OutputFormat::Terminal, StopwordBehavior::Keep);
        let happy = token("happy", Category::Plain { split: Some(3) });
        assert_eq!(render_token(&happy, &html), "<b>hap</b>py");
        assert_eq!(render_token(&happy, &terminal), "\x1b[1mhap\x1b[0mpy");
    }

    #[test]
    fn test_plain_without_fixation() {
        let config = config(OutputFormat::Html, StopwordBehavior::Keep);
        let word = token("happy", Category::Plain { split: None });
        assert_eq!(render_token(&word, &config), "happy");
    }

    #[test]
    fn test_empty_prefix_emits_no_wrapper() {
        let config = config(OutputFormat::Html, StopwordBehavior::Keep);
        let word = token("bionic", Category::Plain { split: Some(0) });
        assert_eq!(render_token(&word, &config), "bionic");
    }

    #[test]
    fn test_rare_word_styles() {
        let rare = token("Bionic", Category::Rare);
        for (behavior, expected) in [
            (RareWordBehavior::Highlight, "<mark>Bionic</mark>"),
            (RareWordBehavior::Underline, "<u>Bionic</u>"),
            (RareWordBehavior::Bold, "<b>Bionic</b>"),
        ] {
            let config = HighlighterConfig::builder()
                .rare_word_behavior(behavior)
                .build()
                .unwrap();
            assert_eq!(render_token(&rare, &config), expected);
        }
    }

    #[test]
    fn test_rare_word_unstyled_when_disabled() {
        let config = HighlighterConfig::builder()
            .style_rare_words(false)
            .build()
            .unwrap();
        assert_eq!(render_token(&token("Bionic", Category::Rare), &config), "Bionic");
    }

    #[test]
    fn test_stopword_behaviors() {
        let the = token("the", Category::Stopword);
        let cases = [
            (StopwordBehavior::Remove, ""),
            (StopwordBehavior::Ignore, "the"),
            (StopwordBehavior::Highlight, "<mark>the</mark>"),
            (StopwordBehavior::Strikethrough, "<s>the</s>"),
            (StopwordBehavior::Bold, "<b>the</b>"),
        ];
        for (behavior, expected) in cases {
            let config = config(OutputFormat::Html, behavior);
            assert_eq!(render_token(&the, &config), expected, "{:?}", behavior);
        }
    }

    #[test]
    fn test_stopword_strikethrough_in_terminal() {
        let config = config(OutputFormat::Terminal, StopwordBehavior::Strikethrough);
        assert_eq!(
            render_token(&token("of", Category::Stopword), &config),
            "o\u{336}f\u{336}"
        );
    }

    #[test]
    fn test_html_keeps_token_text_raw() {
        let config = config(OutputFormat::Html, StopwordBehavior::Keep);
        let word = token("a<b", Category::Plain { split: Some(2) });
        assert_eq!(render_token(&word, &config), "<b>a<</b>b");
        assert_eq!(render_token(&token("&", Category::Separator), &config), "&");
    }

    #[test]
    fn test_styled_stopword_is_wrapped_whole() {
        // "through" is long enough that a fixation would split it
        let through = token("through", Category::Stopword);
        for (behavior, expected) in [
            (StopwordBehavior::Bold, "<b>through</b>"),
            (StopwordBehavior::Highlight, "<mark>through</mark>"),
            (StopwordBehavior::Strikethrough, "<s>through</s>"),
        ] {
            let config = config(OutputFormat::Html, behavior);
            assert_eq!(render_token(&through, &config), expected, "{:?}", behavior);
        }
    }

    #[test]
    fn test_text_format_has_no_markup() {
        let config = config(OutputFormat::Text, StopwordBehavior::Keep);
        let word = token("happy", Category::Plain { split: Some(3) });
        assert_eq!(render_token(&word, &config), "happy");
    }

    #[test]
    fn test_render_body_preserves_order() {
        let config = config(OutputFormat::Html, StopwordBehavior::Keep);
        let tokens = [
            token("We", Category::Plain { split: Some(1) }),
            token(" ", Category::Separator),
            token("are", Category::Plain { split: None }),
        ];
        assert_eq!(render_body(&tokens, &config), "<b>W</b>e are");
    }

    #[test]
    fn test_html_envelope() {
        let config = HighlighterConfig::builder().opacity(0.7).build().unwrap();
        assert_eq!(
            envelope("body".to_string(), &config),
            "<!DOCTYPE html><html><head><style>b {font-weight: 700}</style></head><body><p>body</p></body></html>"
        );
    }

    #[test]
    fn test_html_envelope_of_empty_body() {
        let config = HighlighterConfig::default();
        assert_eq!(
            envelope(String::new(), &config),
            "<!DOCTYPE html><html><head><style>b {font-weight: 750}</style></head><body><p></p></body></html>"
        );
    }

    #[test]
    fn test_terminal_and_text_have_no_envelope() {
        for format in [OutputFormat::Terminal, OutputFormat::Text] {
            let config = config(format, StopwordBehavior::Keep);
            assert_eq!(envelope("body".to_string(), &config), "body");
        }
    }
}
