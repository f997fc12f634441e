//! Property tests for the pipeline's stated guarantees.
//!
//! Two properties must hold for arbitrary glyph input: the event stream is
//! deterministic for a fixed input and configuration, and the duplicate
//! filter is idempotent over its own output.

use proptest::prelude::*;
use textweave::layout::dedup::GlyphDeduplicator;
use textweave::{EngineConfig, Glyph, InMemorySource, LayoutEngine, PageGlyphs, RecordingSink};

fn arb_glyph() -> impl Strategy<Value = Glyph> {
    (
        "[a-z]",
        0.0f32..500.0,
        0.0f32..500.0,
        1.0f32..20.0,
        5.0f32..25.0,
        5.0f32..25.0,
    )
        .prop_map(|(text, x, y, width, height, font_size)| {
            Glyph::new(text, x, y, width, height, font_size)
        })
}

fn arb_page() -> impl Strategy<Value = Vec<Glyph>> {
    prop::collection::vec(arb_glyph(), 0..40)
}

fn run(glyphs: Vec<Glyph>) -> Vec<textweave::Event> {
    let mut source = InMemorySource::new(vec![PageGlyphs {
        glyphs,
        beads: vec![],
    }]);
    let mut sink = RecordingSink::new();
    LayoutEngine::new(EngineConfig::default())
        .process(&mut source, &mut sink)
        .unwrap();
    sink.events
}

proptest! {
    #[test]
    fn determinism(glyphs in arb_page()) {
        let first = run(glyphs.clone());
        let second = run(glyphs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dedup_is_idempotent(glyphs in arb_page()) {
        let mut dedup = GlyphDeduplicator::new(true);
        let survivors: Vec<Glyph> = glyphs.into_iter().filter(|g| dedup.accept(g)).collect();

        let mut again = GlyphDeduplicator::new(true);
        let resurvived: Vec<Glyph> = survivors
            .iter()
            .filter(|g| again.accept(g))
            .cloned()
            .collect();

        prop_assert_eq!(survivors, resurvived);
    }

    #[test]
    fn every_written_character_came_from_the_input(glyphs in arb_page()) {
        let texts: Vec<String> = glyphs.iter().map(|g| g.text.clone()).collect();
        let events = run(glyphs);
        for event in events {
            if let textweave::Event::WriteCharacter { text } = event {
                prop_assert!(texts.contains(&text));
            }
        }
    }
}
