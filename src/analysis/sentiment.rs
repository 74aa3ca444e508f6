//! Keyword-polarity sentiment scoring over free-text news snippets.

use crate::models::sentiment::{SentimentLabel, SentimentResult};

const POSITIVE_WORDS: [&str; 9] = [
    "strong", "bullish", "increase", "growth", "positive", "gains", "rally", "surge", "adoption",
];

const NEGATIVE_WORDS: [&str; 9] = [
    "weak", "bearish", "decrease", "decline", "negative", "losses", "crash", "drop", "fear",
];

/// Score a batch of snippets by polarity-word substring matches.
///
/// Each (snippet, word) containment counts one hit; "increase" inside
/// "increased" still matches. The score is the positive fraction of all hits,
/// 0.5 when there are no hits or no snippets. The overall label stays
/// `Neutral` here: the synthesizer reassigns it from the combined score.
pub fn analyze_sentiment(snippets: &[String]) -> SentimentResult {
    let mut positive_count = 0usize;
    let mut negative_count = 0usize;

    for snippet in snippets {
        let text = snippet.to_lowercase();
        positive_count += POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
        negative_count += NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    }

    let total = positive_count + negative_count;
    let score = if total == 0 {
        0.5
    } else {
        positive_count as f64 / total as f64
    };

    SentimentResult {
        overall_sentiment: SentimentLabel::Neutral,
        score,
        sources_analyzed: snippets.len(),
    }
}
