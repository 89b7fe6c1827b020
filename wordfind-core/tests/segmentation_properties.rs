//! Property tests for sentence segmentation

use proptest::prelude::*;
use wordfind_core::{linearize, MarkupEvent, Segmenter};

const MIN_TOKENS: usize = 5;

fn sentence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..9)
}

fn paragraph() -> impl Strategy<Value = (bool, Vec<Vec<String>>)> {
    (any::<bool>(), prop::collection::vec(sentence(), 1..5))
}

fn events(paragraphs: &[(bool, Vec<Vec<String>>)]) -> Vec<MarkupEvent> {
    let mut events = Vec::new();
    for (page_break, sentences) in paragraphs {
        events.push(MarkupEvent::ParagraphBreak);
        if *page_break {
            events.push(MarkupEvent::PageBreak);
        }
        let text = sentences
            .iter()
            .map(|words| format!("{}.", words.join(" ")))
            .collect::<Vec<_>>()
            .join(" ");
        events.push(MarkupEvent::TextRun(text));
    }
    events
}

proptest! {
    #[test]
    fn ids_are_dense_and_ordered(paragraphs in prop::collection::vec(paragraph(), 0..8)) {
        let annotated = linearize(&events(&paragraphs));
        let sentences = Segmenter::new(MIN_TOKENS).segment(&annotated);

        for (i, sentence) in sentences.iter().enumerate() {
            prop_assert_eq!(sentence.id, i + 1);
        }
    }

    #[test]
    fn pages_never_decrease(paragraphs in prop::collection::vec(paragraph(), 0..8)) {
        let annotated = linearize(&events(&paragraphs));
        let sentences = Segmenter::new(MIN_TOKENS).segment(&annotated);

        for pair in sentences.windows(2) {
            prop_assert!(pair[0].page <= pair[1].page);
        }
        let last_page = annotated.page_breaks() + 1;
        for sentence in &sentences {
            prop_assert!(sentence.page >= 1 && sentence.page <= last_page);
        }
    }

    #[test]
    fn short_candidates_never_stand_alone(paragraphs in prop::collection::vec(paragraph(), 0..8)) {
        let annotated = linearize(&events(&paragraphs));
        let sentences = Segmenter::new(MIN_TOKENS).segment(&annotated);

        // Only the opening sentence can be short: every later one started
        // from a candidate long enough to close its predecessor
        for sentence in sentences.iter().skip(1) {
            prop_assert!(sentence.text.split_whitespace().count() >= MIN_TOKENS);
        }
    }

    #[test]
    fn segmentation_keeps_every_word(paragraphs in prop::collection::vec(paragraph(), 0..8)) {
        let annotated = linearize(&events(&paragraphs));
        let sentences = Segmenter::new(MIN_TOKENS).segment(&annotated);

        let expected: Vec<&str> = paragraphs
            .iter()
            .flat_map(|(_, sentences)| sentences.iter().flatten())
            .map(String::as_str)
            .collect();
        let actual: Vec<&str> = sentences
            .iter()
            .flat_map(|s| s.text.split_whitespace())
            .collect();
        prop_assert_eq!(actual, expected);

        let candidates: usize = paragraphs.iter().map(|(_, s)| s.len()).sum();
        prop_assert!(sentences.len() <= candidates);
    }
}
