//! Fuzzy task-intent classification.
//!
//! Each intent is scored from two additive signals per keyword: per-word
//! fuzzy similarity and a literal substring check over the whole text.
//! Objects use the same signals at half weight and never count as keyword
//! hits. The sum is divided by the size of the intent's vocabulary, not by
//! the utterance length.

use vx_protocol::{IntentDefinition, IntentMatch};

use crate::similarity::similarity;

const OBJECT_WEIGHT: f64 = 0.5;

/// Score breakdown for one intent against one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentScore {
    pub intent: String,
    /// Sum of all weighted contributions.
    pub score: f64,
    /// `score / (keywords + objects)`; unclamped, may exceed 1.0 on long input.
    pub confidence: f64,
    pub keyword_hits: usize,
    /// At least one keyword hit and `confidence >= floor`.
    pub qualifies: bool,
}

#[derive(Debug, Clone)]
pub struct IntentClassifier {
    intents: Vec<IntentDefinition>,
    word_similarity: f64,
}

impl IntentClassifier {
    /// `word_similarity` is the minimum per-word similarity that counts as a hit.
    pub fn new(intents: &[IntentDefinition], word_similarity: f64) -> Self {
        let normalize = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let intents = intents
            .iter()
            .map(|i| IntentDefinition {
                name: i.name.clone(),
                keywords: normalize(&i.keywords),
                objects: normalize(&i.objects),
                floor: i.floor,
            })
            .collect();
        Self {
            intents,
            word_similarity,
        }
    }

    /// Score every intent, in declaration order.
    pub fn scores(&self, corrected: &str) -> Vec<IntentScore> {
        let words: Vec<&str> = corrected.split_whitespace().collect();
        self.intents
            .iter()
            .map(|intent| self.score_intent(intent, &words, corrected))
            .collect()
    }

    /// Pick the best qualifying intent.
    ///
    /// An intent replaces the current pick only if its confidence is strictly
    /// greater, so ties resolve to the earlier-declared intent.
    pub fn classify(&self, corrected: &str) -> Option<IntentMatch> {
        let scores = self.scores(corrected);

        let mut best: Option<&IntentScore> = None;
        for candidate in scores.iter().filter(|s| s.qualifies) {
            tracing::trace!(
                intent = %candidate.intent,
                confidence = candidate.confidence,
                keyword_hits = candidate.keyword_hits,
                "intent qualifies"
            );
            if best.is_none_or(|b| candidate.confidence > b.confidence) {
                best = Some(candidate);
            }
        }

        best.map(|s| IntentMatch {
            intent: s.intent.clone(),
            confidence: s.confidence.min(1.0),
        })
    }

    fn score_intent(&self, intent: &IntentDefinition, words: &[&str], text: &str) -> IntentScore {
        let mut score = 0.0;
        let mut keyword_hits = 0;

        for keyword in &intent.keywords {
            let (fuzzy, fuzzy_hits) = self.word_signal(keyword, words);
            score += fuzzy;
            keyword_hits += fuzzy_hits;
            if text.contains(keyword.as_str()) {
                score += 1.0;
                keyword_hits += 1;
            }
        }

        for object in &intent.objects {
            let (fuzzy, _) = self.word_signal(object, words);
            score += fuzzy * OBJECT_WEIGHT;
            if text.contains(object.as_str()) {
                score += OBJECT_WEIGHT;
            }
        }

        let vocabulary = (intent.keywords.len() + intent.objects.len()).max(1);
        let confidence = score / vocabulary as f64;

        IntentScore {
            intent: intent.name.clone(),
            score,
            confidence,
            keyword_hits,
            qualifies: keyword_hits > 0 && confidence >= intent.floor,
        }
    }

    /// Sum of similarities of every word close enough to `term`, and how many there were.
    fn word_signal(&self, term: &str, words: &[&str]) -> (f64, usize) {
        words
            .iter()
            .map(|w| similarity(w, term))
            .filter(|s| *s >= self.word_similarity)
            .fold((0.0, 0), |(sum, n), s| (sum + s, n + 1))
    }
}
