//! # Flows
//!
//! The two interactive flows of the application, orchestrating catalog and
//! order-book mutations over the [`Terminal`](crate::terminal::Terminal)
//! seam:
//!
//! - [`checkout`]: one customer transaction (selection loops, commit,
//!   receipt, payment acknowledgment)
//! - [`admin`]: the passphrase-gated panel (catalog edits, revenue,
//!   order listing)
//!
//! ## Sentinel Values
//! Reserved inputs change control flow instead of selecting an entity:
//! `0` finishes the current loop or stage, `-1` cancels the checkout
//! transaction (or closes the admin panel mid-operation).

pub mod admin;
pub mod checkout;

use crate::error::AppError;
use crate::terminal::Terminal;

/// Finishes the current selection loop / exits the current panel.
pub const FINISH: i64 = 0;

/// Cancels the enclosing transaction.
pub const CANCEL: i64 = -1;

/// Reads one integer, treating malformed input as a reported, recoverable
/// condition.
///
/// Returns `Ok(None)` after rendering an invalid-input message, so callers
/// simply loop and re-prompt. Only stream failure propagates.
pub(crate) fn prompt_choice<T: Terminal>(
    term: &mut T,
    prompt: &str,
) -> Result<Option<i64>, AppError> {
    match term.read_integer(prompt) {
        Ok(choice) => Ok(Some(choice)),
        Err(AppError::Core(err)) => {
            term.write(&format!("{err}. Please try again.\n"));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;

    #[test]
    fn test_prompt_choice_reports_and_recovers() {
        let mut term = ScriptedTerminal::new(&["oops", "7"]);

        assert_eq!(prompt_choice(&mut term, "> ").unwrap(), None);
        assert!(term.output.contains("Invalid input: oops"));
        assert_eq!(prompt_choice(&mut term, "> ").unwrap(), Some(7));
    }

    #[test]
    fn test_prompt_choice_propagates_io() {
        let mut term = ScriptedTerminal::new(&[]);
        assert!(matches!(prompt_choice(&mut term, "> "), Err(AppError::Io(_))));
    }
}
