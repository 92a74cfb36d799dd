use tantivy::tokenizer::{Language, Stemmer, TextAnalyzer, TokenStream, WhitespaceTokenizer};

use crate::{
    config::{EngineConfig, TextProcessing},
    lemmatizer::{lemmatize, lemmatize_nouns},
    normalizer::{normalize, remove_stopwords},
};

/// Creates an analyzer that splits on whitespace and applies the Snowball
/// English stemmer to every word.
pub fn stemming_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(WhitespaceTokenizer::default())
        .filter(Stemmer::new(Language::English))
        .build()
}

/// Collects the text of every token the analyzer produces.
pub fn collect_tokens(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();
    while let Some(token) = stream.next() {
        tokens.push(token.text.to_owned());
    }
    tokens
}

/// Stems whitespace separated text word by word.
pub fn stem(text: &str) -> String {
    collect_tokens(&mut stemming_analyzer(), text).join(" ")
}

/// The text processing pipeline shared by indexing and querying:
/// `normalize`, then optional stopword removal, then the configured
/// stemming or lemmatization.
#[derive(Clone)]
pub struct TextPipeline {
    stopwords: bool,
    processing: TextProcessing,
    stemmer: TextAnalyzer,
}

impl TextPipeline {
    pub fn new(config: &EngineConfig) -> Self {
        TextPipeline {
            stopwords: config.stopwords,
            processing: config.text_processing,
            stemmer: stemming_analyzer(),
        }
    }

    /// Runs the pipeline, returning single-space separated tokens.
    pub fn process(&self, text: &str) -> String {
        let normalized = normalize(text);
        let text = if self.stopwords {
            remove_stopwords(&normalized)
        } else {
            normalized
        };

        match self.processing {
            TextProcessing::None => text,
            TextProcessing::Stemmer => {
                let mut analyzer = self.stemmer.clone();
                collect_tokens(&mut analyzer, &text).join(" ")
            }
            TextProcessing::Lemmatizer => lemmatize_nouns(&text),
            TextProcessing::LemmatizerPos => lemmatize(&text),
        }
    }

    /// Runs the pipeline and splits the result on whitespace.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.process(text)
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(stopwords: bool, processing: TextProcessing) -> TextPipeline {
        TextPipeline::new(
            &EngineConfig::default()
                .with_stopwords(stopwords)
                .with_text_processing(processing),
        )
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem("running fast"), "run fast");
        assert_eq!(stem("run"), "run");
        assert_eq!(stem("cats programming"), "cat program");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn test_collect_tokens() {
        let mut analyzer = stemming_analyzer();
        let tokens = collect_tokens(&mut analyzer, "jumping foxes");
        assert_eq!(tokens, vec!["jump".to_string(), "fox".to_string()]);

        let mut cloned = analyzer.clone();
        assert_eq!(collect_tokens(&mut cloned, "jumping"), vec!["jump".to_string()]);
    }

    #[test]
    fn test_pipeline_none() {
        let p = pipeline(false, TextProcessing::None);
        assert_eq!(p.process("The Cat, sat on the MAT!"), "the cat sat on the mat");
        assert_eq!(p.tokens("  "), Vec::<String>::new());
        assert_eq!(
            p.tokens("rust-lang.org"),
            vec!["rust".to_string(), "lang".to_string(), "org".to_string()]
        );
    }

    #[test]
    fn test_pipeline_stopwords() {
        let p = pipeline(true, TextProcessing::None);
        assert_eq!(p.process("The cat sat on the mat"), "cat sat mat");

        // stopwords are removed before stemming, "doing" would otherwise become "do"
        let p = pipeline(true, TextProcessing::Stemmer);
        assert_eq!(p.process("What are you doing"), "");
    }

    #[test]
    fn test_pipeline_processing() {
        let p = pipeline(false, TextProcessing::Stemmer);
        assert_eq!(p.process("Running, FAST!"), "run fast");

        let p = pipeline(false, TextProcessing::Lemmatizer);
        assert_eq!(p.process("Cats and Boxes"), "cat and box");

        let p = pipeline(false, TextProcessing::LemmatizerPos);
        assert_eq!(p.process("They were running"), "they be run");
    }
}
