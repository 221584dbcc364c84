use std::collections::BTreeSet;

use crate::knowledge::KnowledgeBase;

/// Splits question text into an ordered sequence of tokens.
///
/// Any implementation must return a topic key as a standalone token when
/// the key occurs as a word of the text.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}

/// Segmenter for space-delimited text.
///
/// Lowercases, then splits on every character that is not alphanumeric, so
/// trailing punctuation never hides a word ("derivative?" -> "derivative").
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSegmenter;

impl Segmenter for WordSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Forward maximum matching against a fixed vocabulary.
///
/// For scripts written without spaces. At each position the longest
/// vocabulary entry is taken, provided it does not end inside a word of a
/// space-delimited script. Otherwise a run of space-delimited letters and
/// digits is kept as one word, and any other character becomes a token of
/// its own. Whitespace and punctuation are skipped.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    vocabulary: BTreeSet<String>,
    max_chars: usize,
}

impl DictionarySegmenter {
    pub fn new<I, W>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let vocabulary: BTreeSet<String> = vocabulary
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        let max_chars = vocabulary
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            vocabulary,
            max_chars,
        }
    }

    /// Use the knowledge base's own topic keys as the vocabulary.
    pub fn for_knowledge_base(knowledge: &KnowledgeBase) -> Self {
        Self::new(knowledge.keys().map(|key| key.as_str()))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn longest_match(&self, chars: &[char], position: usize) -> Option<usize> {
        let rest = &chars[position..];
        let limit = self.max_chars.min(rest.len());

        (1..=limit).rev().find(|&len| {
            let end = position + len;
            let splits_word =
                end < chars.len() && is_word_char(chars[end - 1]) && is_word_char(chars[end]);
            if splits_word {
                return false;
            }
            let candidate: String = rest[..len].iter().collect();
            self.vocabulary.contains(&candidate)
        })
    }
}

/// Letters of scripts conventionally written without spaces between words.
fn is_unspaced_script(c: char) -> bool {
    matches!(
        c as u32,
        0x0E00..=0x0EFF // Thai, Lao
            | 0x1000..=0x109F // Myanmar
            | 0x1780..=0x17FF // Khmer
            | 0x3040..=0x30FF // Hiragana, Katakana
            | 0x3400..=0x4DBF // CJK extension A
            | 0x4E00..=0x9FFF // CJK unified ideographs
            | 0xF900..=0xFAFF // CJK compatibility ideographs
            | 0x20000..=0x2FA1F // CJK extensions B and later
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() && !is_unspaced_script(c)
}

impl Segmenter for DictionarySegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let mut tokens = Vec::new();
        let mut position = 0;

        while position < chars.len() {
            let current = chars[position];

            if !current.is_alphanumeric() {
                position += 1;
                continue;
            }

            let len = match self.longest_match(&chars, position) {
                Some(len) => len,
                None if is_word_char(current) => chars[position..]
                    .iter()
                    .take_while(|&&c| is_word_char(c))
                    .count(),
                None => 1,
            };
            tokens.push(chars[position..position + len].iter().collect());
            position += len;
        }

        tokens
    }
}
