// Splits object keys into lowercase words. Boundaries come from explicit
// separators, case transitions and letter/digit transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            CharClass::Upper
        } else if ch.is_ascii_lowercase() {
            CharClass::Lower
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, CharClass::Upper | CharClass::Lower)
    }
}

fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-' || ch.is_whitespace()
}

/// Split a key into its words, lowercased.
///
/// `fooBar`, `foo_bar`, `foo-bar`, `FooBar` and `foo bar` all yield
/// `["foo", "bar"]`. A run of capitals followed by a lowercase letter ends one
/// character early, so `HTTPServer` yields `["http", "server"]`. Letter/digit
/// transitions always split: `user2Name` yields `["user", "2", "name"]`.
///
/// Characters other than ASCII letters, digits and separators stay attached to
/// the word they appear in.
pub fn tokenize(key: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharClass> = None;
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if is_separator(ch) {
            flush(&mut current, &mut words);
            prev = None;
            continue;
        }

        let class = CharClass::of(ch);
        let boundary = match (prev, class) {
            (Some(CharClass::Lower), CharClass::Upper) => true,
            (Some(CharClass::Digit), c) if c.is_letter() => true,
            (Some(p), CharClass::Digit) if p.is_letter() => true,
            // HTTPServer: the 'S' belongs to the next word
            (Some(CharClass::Upper), CharClass::Upper) => chars
                .peek()
                .is_some_and(|next| CharClass::of(*next) == CharClass::Lower),
            _ => false,
        };

        if boundary {
            flush(&mut current, &mut words);
        }

        current.push(ch.to_ascii_lowercase());
        prev = Some(class);
    }

    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
