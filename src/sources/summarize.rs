//! Offline extractive summarizer used in place of an on-device model.

use async_trait::async_trait;

use super::{ProviderError, ProviderResult, Summarizer};

/// Picks the leading sentences of the prose in a text.
///
/// Code fences and bullet markers are skipped; bullets count as sentences.
#[derive(Clone, Debug)]
pub struct ExtractiveSummarizer {
    /// Reported by `is_available`.
    available: bool,
    /// Number of sentences kept.
    max_sentences: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ExtractiveSummarizer {
    /// Summarizer keeping two sentences.
    pub const fn new(available: bool) -> Self {
        Self {
            available,
            max_sentences: 2,
        }
    }

    /// Override the number of sentences kept (at least one).
    #[must_use]
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = n.max(1);
        self
    }
}

/// What: Split prose into sentences, ignoring fenced code blocks.
///
/// Inputs:
/// - `text`: Free text, possibly with markdown-style bullets and code fences
///
/// Output:
/// - Trimmed sentences in reading order.
fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut in_fence = false;
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || line.is_empty() {
            continue;
        }
        let line = line.trim_start_matches(['•', '-', '*']).trim();
        let mut current = String::new();
        for ch in line.chars() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?') {
                let s = current.trim();
                if !s.is_empty() {
                    out.push(s.to_string());
                }
                current.clear();
            }
        }
        let rest = current.trim();
        if !rest.is_empty() {
            out.push(rest.to_string());
        }
    }
    out
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn summarize(&self, text: &str) -> ProviderResult<String> {
        if !self.available {
            return Err(ProviderError::new("Summarizer unavailable"));
        }
        let picked = sentences(text);
        if picked.is_empty() {
            // No message: callers supply their own fallback.
            return Err(ProviderError::unknown());
        }
        Ok(picked
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" "))
    }
}
