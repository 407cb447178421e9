use std::collections::HashSet;

/// Case-insensitive dictionary predicate, loaded once per game from an
/// external word list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Judge {
    dictionary: HashSet<String>,
}

impl Judge {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            dictionary: words.into_iter().map(|word| word.to_lowercase()).collect(),
        }
    }

    /// Builds a judge from newline-delimited word list contents.
    pub fn from_word_list(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn valid(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}
