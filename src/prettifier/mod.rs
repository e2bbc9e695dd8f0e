pub mod words;

use crate::casing;
use crate::trace::{self, DebugWriter, Tracer};
use finl_unicode::categories::CharacterCategories;
use std::io::Write;
use words::WordList;

const TEST_PREFIX: &str = "Test";

/// Turn the name of a Go test, as reported by `go test -json`, into a
/// readable sentence.
///
/// Go's `testing` package replaces the spaces in subtest names with
/// underscores, so `TestFoo/has_well-formed_output` is the subtest
/// "has well-formed output" of `TestFoo`. This undoes that, and splits the
/// camel-case parent name into words:
///
/// ```
/// assert_eq!(
///     gotestdox::prettify("TestFoo/has_well-formed_output"),
///     "Foo has well-formed output"
/// );
/// ```
///
/// # Multi-word function names
///
/// `TestHandleInputClosesInputAfterReading` is about a function called
/// `HandleInput`, but nothing in the name says so, and it comes out as
/// "Handle input closes input after reading". An underscore after the
/// function name marks where it ends:
///
/// ```
/// assert_eq!(
///     gotestdox::prettify("TestHandleInput_ClosesInputAfterReading"),
///     "HandleInput closes input after reading"
/// );
/// ```
///
/// Only the first underscore before any `/` has this meaning.
///
/// # Debugging
///
/// When `GOTESTDOX_DEBUG` is set to a non-empty value, every scanner decision
/// is written to the stream configured with [`crate::set_debug_writer`]
/// (standard error unless replaced). The variable is read on every call.
pub fn prettify(input: &str) -> String {
    if trace::debug_enabled() {
        prettify_with_trace(input, &mut DebugWriter)
    } else {
        Prettifier::new(input, Tracer::disabled()).run()
    }
}

/// Same as [`prettify`], but always traces into `out`, regardless of
/// `GOTESTDOX_DEBUG`.
pub fn prettify_with_trace(input: &str, out: &mut dyn Write) -> String {
    Prettifier::new(input, Tracer::to(out)).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BetweenWords,
    InWord,
}

struct Prettifier<'t> {
    input: Vec<char>,
    start: usize,
    pos: usize,
    words: WordList,
    in_sub_test: bool,
    seen_underscore: bool,
    trace: Tracer<'t>,
}

impl<'t> Prettifier<'t> {
    fn new(raw: &str, trace: Tracer<'t>) -> Self {
        let name = raw.strip_prefix(TEST_PREFIX).unwrap_or(raw);
        let mut prettifier = Self {
            input: name.chars().collect(),
            start: 0,
            pos: 0,
            words: WordList::new(),
            in_sub_test: false,
            seen_underscore: false,
            trace,
        };
        prettifier.trace.line(format_args!("input: {}", raw));
        prettifier
    }

    fn run(mut self) -> String {
        let mut state = Some(State::BetweenWords);
        while let Some(current) = state {
            state = match current {
                State::BetweenWords => self.between_words(),
                State::InWord => self.in_word(),
            };
        }

        let result = self.words.join();
        self.trace.line(format_args!("result: {:?}", result));
        result
    }

    /// Skip separators. The first other character starts a word and is
    /// consumed here, so `in_word` never sees it as a boundary.
    fn between_words(&mut self) -> Option<State> {
        loop {
            self.trace_state(State::BetweenWords);
            match self.walk() {
                None => return None,
                Some('_' | '/') => self.skip(),
                Some(_) => return Some(State::InWord),
            }
        }
    }

    fn in_word(&mut self) -> Option<State> {
        loop {
            self.trace_state(State::InWord);
            let Some(r) = self.peek() else {
                self.emit();
                return None;
            };

            match r {
                '_' => {
                    self.emit();
                    if !self.seen_underscore && !self.in_sub_test {
                        // End of a multi-word function name
                        self.fold_function_name();
                    }
                    return Some(State::BetweenWords);
                }
                '/' => {
                    self.emit();
                    self.in_sub_test = true;
                    self.words.commit();
                    return Some(State::BetweenWords);
                }
                r if is_digit(r) => {
                    if self.continues_number() || self.in_initialism() {
                        self.walk();
                    } else {
                        self.emit();
                        return Some(State::BetweenWords);
                    }
                }
                r if r.is_uppercase() => {
                    if self.in_initialism() {
                        self.walk();
                    } else {
                        self.emit();
                        return Some(State::BetweenWords);
                    }
                }
                _ => {
                    self.walk();
                }
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn walk(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn skip(&mut self) {
        self.start = self.pos;
    }

    fn prev(&self) -> Option<char> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.input.get(i))
            .copied()
    }

    /// The character after the one under the cursor, or the one under the
    /// cursor when that is the last.
    fn lookahead(&self) -> Option<char> {
        self.input
            .get(self.pos + 1)
            .or_else(|| self.input.get(self.pos))
            .copied()
    }

    /// A digit after a digit, a minus sign, or an equals sign, as in `100`,
    /// `-1` or `n=3`.
    fn continues_number(&self) -> bool {
        matches!(self.prev(), Some(c) if is_digit(c) || c == '-' || c == '=')
    }

    /// Whether the character under the cursor is inside a run like `JSON`,
    /// `UTF8` or `IDs`.
    fn in_initialism(&self) -> bool {
        if !self.prev().is_some_and(char::is_uppercase) {
            return false;
        }
        matches!(self.lookahead(), Some(c) if c.is_uppercase() || is_digit(c) || c == 's')
    }

    /// Whether the word being emitted is an initialism: no lower-case letters
    /// except possibly a final `s`.
    fn is_initialism(&self) -> bool {
        let end = self.pos.saturating_sub(1).max(self.start);
        if self.input[self.start..end].iter().any(|c| c.is_lowercase()) {
            return false;
        }
        matches!(self.input.get(end), Some(&c) if c.is_uppercase() || is_digit(c) || c == 's')
    }

    fn emit(&mut self) {
        let word: String = self.input[self.start..self.pos].iter().collect();

        let word = if self.words.is_empty() {
            casing::title(&word)
        } else if word == "OK" {
            word
        } else if word.chars().count() < 3 {
            // Short words such as "A" or "Is"
            casing::lower(&word)
        } else if self.is_initialism() {
            word
        } else {
            casing::lower(&word)
        };

        self.trace.line(format_args!("emit {:?}", word));
        self.words.push(word);
        self.skip();
    }

    fn fold_function_name(&mut self) {
        let name = self.words.fold();
        self.trace.line(format_args!("multiword function {}", name));
        self.seen_underscore = true;
    }

    fn trace_state(&mut self, state: State) {
        if !self.trace.is_enabled() {
            return;
        }
        let word: String = self.input[self.start..self.pos].iter().collect();
        let next = self
            .peek()
            .map_or_else(|| "EOF".to_string(), |c| c.to_string());
        self.trace
            .line(format_args!("{:?}: [{}] -> {}", state, word, next));
    }
}

/// Decimal digits only (`Nd`), so `²` or `½` stay part of a word.
fn is_digit(c: char) -> bool {
    c.is_number_decimal()
}
