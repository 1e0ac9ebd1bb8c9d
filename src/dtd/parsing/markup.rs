//! Comments, processing instructions and notation declarations
//!
//! None of these are checked beyond being closed. Comment bodies arrive from the lexer's
//! comment mode, so the only thing left to verify here is that a `-->` shows up before the
//! input runs out.

use super::parser::{PResult, Parser};
use crate::dtd::error::CheckError;
use crate::dtd::events::EventSink;
use crate::dtd::token::TokenKind;

impl<S: EventSink> Parser<S> {
    /// Skips from the opener (`<!NOTATION`, `<?`) past the next `end` token
    pub(super) fn skip_declaration(&mut self, end: TokenKind) -> PResult {
        let opener = self.current(end.describe())?;
        self.notice(format!(
            "Not parsing contents of {}, skipping to {}",
            opener.lexeme,
            end.describe()
        ));
        self.consume()?;
        self.skip_past(end, opener.location())
    }

    pub(super) fn comment(&mut self) -> PResult {
        let start = self.position();
        loop {
            self.consume()?;
            match self.peek_kind() {
                Some(TokenKind::CommentEnd) => return self.consume(),
                Some(_) => {}
                None => return Err(CheckError::UnterminatedComment { start }),
            }
        }
    }
}
