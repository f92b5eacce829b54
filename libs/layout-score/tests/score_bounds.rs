use layout_score::{
    analyze_document, weighted_score, AnalyzerConfig, CompositeInputs, DocumentLayout, Glyph,
    PageDimensions, ScoreWeights, Word,
};

fn page() -> PageDimensions {
    PageDimensions {
        width: 612.0,
        height: 792.0,
    }
}

/// Many fonts, many sizes, scattered margins, chaotic leading.
fn chaotic_document() -> DocumentLayout {
    let glyphs = (0..300)
        .map(|i| Glyph::new(format!("Font{}", i % 40), 6.0 + (i % 25) as f64, 1))
        .collect();
    let words = (0..200)
        .map(|i| {
            let left = ((i * 37) % 540) as f64;
            let top = ((i * i * 13) % 700) as f64 + (i % 3) as f64 * 0.7;
            Word::new(left, left + 30.0, top, 1 + (i % 3) as u32)
        })
        .collect();
    DocumentLayout {
        pages: vec![page(), page()],
        glyphs,
        words,
    }
}

#[test]
fn test_chaotic_document_stays_in_range() {
    let analysis = analyze_document(&chaotic_document(), &AnalyzerConfig::default()).unwrap();
    let scores = analysis.scores;
    for score in [
        scores.font_consistency,
        scores.alignment,
        scores.spacing,
        scores.formatting,
    ] {
        assert!(score <= 100, "score out of range: {score}");
    }
    assert_eq!(scores.font_consistency, 0);
    assert_eq!(analysis.metrics.font_variety_count, 8);
    assert_eq!(analysis.signals.font.font_counts.len(), 8);
}

#[test]
fn test_extreme_coordinates_stay_in_range() {
    let layout = DocumentLayout {
        pages: vec![page()],
        glyphs: vec![Glyph::new("", 1e9, 1)],
        words: vec![
            Word::new(-1e12, 1e12, -1e12, 1),
            Word::new(1e12, 1e12, 1e12, 9),
            Word::new(0.0, 0.0, 5.0, 1),
        ],
    };
    let analysis = analyze_document(&layout, &AnalyzerConfig::default()).unwrap();
    assert!(analysis.scores.alignment <= 100);
    assert!(analysis.scores.spacing <= 100);
    assert_eq!(analysis.scores.font_consistency, 100);
    assert_eq!(analysis.metrics.dominant_font, "Unknown");
}

#[test]
fn test_formatting_score_feeds_composite() {
    let analysis = analyze_document(&chaotic_document(), &AnalyzerConfig::default()).unwrap();
    let inputs = CompositeInputs {
        ai_score: 80.0,
        experience_years: 5.0,
        format_score: analysis.scores.formatting as f64,
        answers_score: 40.0,
    };
    let score = weighted_score(&inputs, &ScoreWeights::default());
    assert!((0.0..=100.0).contains(&score));
}
