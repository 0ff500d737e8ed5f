use log::{debug, warn};

use crate::eval::{Evaluation, evaluate};
use crate::expression::errors::BuildError;
use crate::expression::token::{Op, Token};

/// State machine for incrementally building an arithmetic expression
///
/// The builder owns the four card values of the current round and their
/// `used` flags. State is implicit in the token sequence plus those flags;
/// every mutator either applies its transition or rejects it with a
/// [`BuildError`], leaving the expression untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionBuilder {
    values: [i32; 4],
    used: [bool; 4],
    tokens: Vec<Token>,
}

impl ExpressionBuilder {
    /// Create an empty builder over the four card values of a round
    pub fn new(values: [i32; 4]) -> Self {
        Self {
            values,
            used: [false; 4],
            tokens: Vec::new(),
        }
    }

    /// Select the card at `card`, appending its number token
    ///
    /// Selecting a number directly after another number replaces the
    /// previous selection instead of rejecting the new one, so the caller
    /// can change their mind without an explicit delete.
    ///
    /// # Errors
    ///
    /// Returns an error when the card index is out of range or the card is
    /// already part of the expression.
    pub fn add_number(&mut self, card: usize) -> Result<(), BuildError> {
        if card >= self.values.len() {
            warn!("Rejecting out-of-range card index {}", card);
            return Err(BuildError::BadCardIndex(card));
        }
        if self.used[card] {
            warn!("Rejecting reuse of card {}", card);
            return Err(BuildError::CardInUse(card));
        }

        // Implicit replacement: a number directly after a number swaps
        // the previous selection out.
        if let Some(Token::Number { card: prev, .. }) = self.tokens.last().copied()
            && let Some(slot) = self.used.get_mut(prev)
        {
            debug!("Replacing card {} with card {}", prev, card);
            self.tokens.pop();
            *slot = false;
        }

        self.tokens.push(Token::Number {
            card,
            value: self.values[card],
        });
        self.used[card] = true;
        Ok(())
    }

    /// Append an operator or parenthesis token
    ///
    /// An opening parenthesis after a number or `)` inserts an implicit
    /// `×` first, so `3(4+5)` means `3×(4+5)`.
    ///
    /// # Errors
    ///
    /// Returns an error on any transition the grammar forbids: a binary
    /// operator at the start or after another operator, or a `)` with no
    /// matching `(` or directly after a binary operator.
    pub fn add_operator(&mut self, op: Op) -> Result<(), BuildError> {
        match op {
            Op::Open => {
                if self.multiplies_implicitly() {
                    debug!("Inserting implicit × before (");
                    self.tokens.push(Token::Operator(Op::Mul));
                }
                self.tokens.push(Token::Operator(Op::Open));
                Ok(())
            }
            Op::Close => {
                if self.tokens.is_empty() {
                    warn!("Rejecting ) on empty expression");
                    return Err(BuildError::UnmatchedClose);
                }
                if self.open_depth() == 0 {
                    warn!("Rejecting ) with no open parenthesis");
                    return Err(BuildError::UnmatchedClose);
                }
                if let Some(Token::Operator(last)) = self.tokens.last()
                    && *last != Op::Open
                {
                    warn!("Rejecting ) after operator {}", last.symbol());
                    return Err(BuildError::CloseAfterOperator);
                }
                self.tokens.push(Token::Operator(Op::Close));
                Ok(())
            }
            _ => {
                match self.tokens.last() {
                    None => {
                        warn!("Rejecting leading operator {}", op.symbol());
                        Err(BuildError::LeadingOperator)
                    }
                    Some(Token::Operator(last)) => {
                        warn!(
                            "Rejecting operator {} after operator {}",
                            op.symbol(),
                            last.symbol()
                        );
                        Err(BuildError::OperatorAfterOperator)
                    }
                    Some(Token::Number { .. }) => {
                        self.tokens.push(Token::Operator(op));
                        Ok(())
                    }
                }
            }
        }
    }

    /// Remove the last token, un-using its card if it was a number
    ///
    /// Returns whether a token was removed; no-op on an empty expression.
    pub fn undo(&mut self) -> bool {
        match self.tokens.pop() {
            Some(Token::Number { card, .. }) => {
                if let Some(slot) = self.used.get_mut(card) {
                    *slot = false;
                }
                true
            }
            Some(Token::Operator(_)) => true,
            None => false,
        }
    }

    /// Reset to the empty expression with all cards unused
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.used = [false; 4];
    }

    /// Evaluate the current token sequence
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn values(&self) -> [i32; 4] {
        self.values
    }

    pub fn used(&self) -> [bool; 4] {
        self.used
    }

    pub fn is_used(&self, card: usize) -> bool {
        self.used.get(card).copied().unwrap_or(false)
    }

    /// Number of cards currently part of the expression
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|u| **u).count()
    }

    /// Running count of `(` tokens not yet matched by `)`
    pub fn open_depth(&self) -> usize {
        let mut depth = 0usize;
        for token in &self.tokens {
            match token {
                Token::Operator(Op::Open) => depth += 1,
                Token::Operator(Op::Close) => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        depth
    }

    /// True when the next token would be implicitly multiplied, i.e. the
    /// last token is a number or a closing parenthesis.
    fn multiplies_implicitly(&self) -> bool {
        matches!(
            self.tokens.last(),
            Some(Token::Number { .. }) | Some(Token::Operator(Op::Close))
        )
    }
}
