/// A single phone book entry: one display name per phone number.
///
/// The number stays a string because it may carry spaces, hyphens,
/// parentheses and a leading `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub number: String,
    pub name: String,
}

impl Contact {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}

/// A number is valid iff it is non-empty and every character is a digit,
/// whitespace, hyphen, parenthesis or plus sign.
pub fn is_valid_number(number: &str) -> bool {
    !number.is_empty()
        && number
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_number_shapes() {
        assert!(is_valid_number("555-1234"));
        assert!(is_valid_number("+34 (911) 23 45 67"));
        assert!(is_valid_number("5551234"));
    }

    #[test]
    fn rejects_letters_and_punctuation() {
        assert!(!is_valid_number("555-ABCD"));
        assert!(!is_valid_number("555_1234"));
        assert!(!is_valid_number("555.1234"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_number(""));
    }
}
