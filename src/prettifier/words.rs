use crate::casing;

/// Words emitted during one scan.
///
/// Words emitted before the first underscore (or path separator) stay
/// provisional, since the underscore may reveal that they spell a multi-word
/// function name. Once that is decided they are settled, and every later word
/// is committed directly.
#[derive(Debug, Default)]
pub struct WordList {
    provisional: Vec<String>,
    committed: Vec<String>,
    settled: bool,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.provisional.is_empty() && self.committed.is_empty()
    }

    pub fn push(&mut self, word: String) {
        if self.settled {
            self.committed.push(word);
        } else {
            self.provisional.push(word);
        }
    }

    /// Keep the provisional words as separate words.
    pub fn commit(&mut self) {
        if !self.settled {
            self.committed.append(&mut self.provisional);
            self.settled = true;
        }
    }

    /// Merge the provisional words into a single title-cased name, which
    /// becomes the only word so far. Returns the merged name.
    pub fn fold(&mut self) -> String {
        let name: String = self
            .provisional
            .drain(..)
            .map(|word| casing::title(&word))
            .collect();
        self.committed.push(name.clone());
        self.settled = true;
        name
    }

    pub fn join(&self) -> String {
        if self.settled {
            self.committed.join(" ")
        } else {
            self.provisional.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        let mut list = WordList::new();
        for word in words {
            list.push(word.to_string());
        }
        list
    }

    #[test]
    fn test_join_unsettled() {
        let list = list(&["Handle", "input"]);
        assert!(!list.is_empty());
        assert_eq!(list.join(), "Handle input");
    }

    #[test]
    fn test_fold_replaces_provisional_words() {
        let mut list = list(&["Handle", "input"]);
        assert_eq!(list.fold(), "HandleInput");
        list.push("closes".to_string());
        assert_eq!(list.join(), "HandleInput closes");
    }

    #[test]
    fn test_commit_keeps_words() {
        let mut list = list(&["Foo", "bar"]);
        list.commit();
        list.push("baz".to_string());
        assert_eq!(list.join(), "Foo bar baz");
    }

    #[test]
    fn test_commit_after_fold_is_noop() {
        let mut list = list(&["Foo", "bar"]);
        list.fold();
        list.commit();
        assert_eq!(list.join(), "FooBar");
    }

    #[test]
    fn test_empty() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert_eq!(list.join(), "");
    }
}
