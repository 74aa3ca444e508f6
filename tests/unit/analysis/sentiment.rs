//! Unit tests for keyword-polarity sentiment scoring

use signalcraft::analysis::sentiment::analyze_sentiment;
use signalcraft::models::sentiment::SentimentLabel;

fn snippets(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_snippet_list_scores_neutral() {
    let result = analyze_sentiment(&[]);
    assert_eq!(result.score, 0.5);
    assert_eq!(result.sources_analyzed, 0);
}

#[test]
fn snippets_without_polarity_words_score_neutral() {
    let result = analyze_sentiment(&snippets(&["the market opened", "volume was unchanged"]));
    assert_eq!(result.score, 0.5);
    assert_eq!(result.sources_analyzed, 2);
}

#[test]
fn strong_bullish_rally_scores_one() {
    // Three positive hits (strong, bullish, rally), zero negative.
    let result = analyze_sentiment(&snippets(&["strong bullish rally"]));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.sources_analyzed, 1);
}

#[test]
fn purely_negative_news_scores_zero() {
    let result = analyze_sentiment(&snippets(&["crash and fear as losses mount"]));
    assert_eq!(result.score, 0.0);
}

#[test]
fn matching_is_case_insensitive_substring() {
    // "increase" matches inside "increased", "GROWTH" matches lowercased.
    let result = analyze_sentiment(&snippets(&["Volumes increased on GROWTH outlook"]));
    assert_eq!(result.score, 1.0);
}

#[test]
fn mixed_polarity_scores_positive_fraction() {
    // 2 positive (rally, gains) and 1 negative (fear) in one snippet,
    // 1 negative (decline) in the other.
    let result = analyze_sentiment(&snippets(&[
        "rally brings gains despite fear",
        "analysts expect a decline",
    ]));
    assert_eq!(result.score, 0.5);
    assert_eq!(result.sources_analyzed, 2);
}

#[test]
fn analyzer_leaves_label_neutral_for_downstream_classification() {
    let result = analyze_sentiment(&snippets(&["strong bullish rally"]));
    assert_eq!(result.overall_sentiment, SentimentLabel::Neutral);
}

#[test]
fn label_classifies_from_combined_score() {
    assert_eq!(SentimentLabel::from_combined(0.7), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::from_combined(0.6), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_combined(0.5), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_combined(0.4), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_combined(0.3), SentimentLabel::Negative);
}
