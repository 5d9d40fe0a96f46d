use amdown::render::{HtmlStrategy, PrintStrategy, Renderer};
use amdown::{parse_str, parser::parse_inline};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plain_words_stay_a_single_text_run(words in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let text = words.join(" ");
        let inline = parse_inline(&text);
        prop_assert_eq!(inline.children.len(), 1);
        prop_assert_eq!(inline.raw_text(), text);
    }

    #[test]
    fn raw_text_strips_wrapping_markers(
        words in prop::collection::vec(
            ("[a-z]{1,8}", prop::sample::select(vec!["", "**", "*", "__", "_", "~~", "==", "`"])),
            1..6,
        )
    ) {
        let text = words
            .iter()
            .map(|(word, marker)| format!("{marker}{word}{marker}"))
            .collect::<Vec<_>>()
            .join(" ");
        let plain = words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(parse_inline(&text).raw_text(), plain);
    }

    #[test]
    fn any_markup_parses_and_renders(
        lines in prop::collection::vec("[-#>*_`$|!()\\[\\] a-z0-9]{0,24}", 0..12)
    ) {
        let doc = parse_str(&lines.join("\n"));
        let html = Renderer::new(HtmlStrategy).render(&doc.elements);
        let print = Renderer::new(PrintStrategy::new()).render(&doc.elements);
        prop_assert!(!html.contains('\x01'));
        prop_assert_eq!(&html, &Renderer::new(HtmlStrategy).render(&doc.elements));
        prop_assert!(!print.contains('\x01'));
    }
}
