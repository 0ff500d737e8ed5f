/// Operators and parentheses selectable while building an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Open,
    Close,
}

impl Op {
    /// The symbol shown on the operator button for this token
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
            Op::Open => '(',
            Op::Close => ')',
        }
    }

    /// Parse a symbol as typed by a host; accepts ASCII aliases for × and ÷
    pub fn from_symbol(symbol: char) -> Option<Op> {
        match symbol {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '×' | '*' | 'x' => Some(Op::Mul),
            '÷' | '/' => Some(Op::Div),
            '(' => Some(Op::Open),
            ')' => Some(Op::Close),
            _ => None,
        }
    }

    /// True for the four binary operators, false for parentheses
    pub fn is_binary(self) -> bool {
        !matches!(self, Op::Open | Op::Close)
    }
}

/// An atomic element of the expression under construction
///
/// A `Number` token is bound to exactly one card; the card index may appear
/// at most once in the live expression at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number { card: usize, value: i32 },
    Operator(Op),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number { .. })
    }
}
