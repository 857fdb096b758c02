//! interp::command
//!
//! Command keyword recognition.

/// The recognized command keywords.
///
/// Only a line's first token is checked against this set; later tokens are
/// ordinary arguments even if they happen to spell a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `@addPages` - register one or more pages
    AddPages,
    /// `@addLinks` - register directed links from one source
    AddLinks,
    /// `@isConnected` - query reachability between two pages
    IsConnected,
}

impl Keyword {
    /// Recognize a first token as a command keyword.
    pub fn parse(token: &str) -> Option<Keyword> {
        match token {
            "@addPages" => Some(Keyword::AddPages),
            "@addLinks" => Some(Keyword::AddLinks),
            "@isConnected" => Some(Keyword::IsConnected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_three_keywords() {
        assert_eq!(Keyword::parse("@addPages"), Some(Keyword::AddPages));
        assert_eq!(Keyword::parse("@addLinks"), Some(Keyword::AddLinks));
        assert_eq!(Keyword::parse("@isConnected"), Some(Keyword::IsConnected));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(Keyword::parse("@addpages"), None);
        assert_eq!(Keyword::parse("@ISCONNECTED"), None);
    }

    #[test]
    fn marker_character_is_required() {
        assert_eq!(Keyword::parse("addPages"), None);
        assert_eq!(Keyword::parse("isConnected"), None);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(Keyword::parse("@removePages"), None);
        assert_eq!(Keyword::parse(""), None);
    }
}
