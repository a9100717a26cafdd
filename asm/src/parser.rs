use color_print::cformat;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// Split a raw source line into its code and its `//` comment.
/// Whitespace is not significant anywhere in an instruction, so it is dropped.
pub fn split_comment(raw: &str) -> (String, Option<String>) {
    let (code, comment) = match raw.find("//") {
        Some(idx) => (&raw[..idx], Some(raw[idx + 2..].trim().to_string())),
        None => (raw, None),
    };
    let code = code.chars().filter(|c| !c.is_whitespace()).collect();
    (code, comment)
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(name)`
    Label(String),
    /// `@value`
    Addr(Imm),
    /// `dest=comp;jump`, kept as text until encoding
    Comp(String),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Option<Stmt>, Error> {
        if code.is_empty() {
            return Ok(None);
        }
        if let Some(rest) = code.strip_prefix('(') {
            return match rest.strip_suffix(')') {
                Some(name) if is_symbol(name) => Ok(Some(Stmt::Label(name.to_string()))),
                _ => Err(Error::MalformedLabel(code.to_string())),
            };
        }
        if let Some(operand) = code.strip_prefix('@') {
            return Ok(Some(Stmt::Addr(Imm::parse(operand)?)));
        }
        Ok(Some(Stmt::Comp(code.to_string())))
    }

    /// Occupies a word of instruction memory.
    pub fn is_inst(&self) -> bool {
        !matches!(self, Stmt::Label(_))
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::Label(name) => cformat!("<g>({})</>", name),
            Stmt::Addr(imm) => cformat!("<r>@</>{}", imm.cfmt()),
            Stmt::Comp(text) => cformat!("<b>{}</>", text),
        }
    }
}

impl std::fmt::Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Label(name) => write!(f, "({})", name),
            Stmt::Addr(imm) => write!(f, "@{}", imm),
            Stmt::Comp(text) => write!(f, "{}", text),
        }
    }
}

// ----------------------------------------------------------------------------
// Immidiate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Symbol(String),
}

impl Imm {
    pub fn parse(s: &str) -> Result<Imm, Error> {
        // R0 .. Rn are plain numerals
        if let Some(digits) = s.strip_prefix('R') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return parse_numeral(digits).map(Imm::Literal);
            }
        }
        match s.chars().next() {
            Some(head) if head.is_ascii_digit() => parse_numeral(s).map(Imm::Literal),
            _ if is_symbol(s) => Ok(Imm::Symbol(s.to_string())),
            _ => Err(Error::InvalidSymbol(s.to_string())),
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Imm::Literal(v) => cformat!("<y>{}</>", v),
            Imm::Symbol(s) => cformat!("<r,u>{}</>", s),
        }
    }
}

impl std::fmt::Display for Imm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Imm::Literal(v) => write!(f, "{}", v),
            Imm::Symbol(s) => write!(f, "{}", s),
        }
    }
}

pub fn parse_numeral(s: &str) -> Result<u16, Error> {
    s.parse::<u16>().map_err(|_| Error::ParseNumeral(s.to_string()))
}

/// Letters, digits, `_ . $ :`, not starting with a digit.
pub fn is_symbol(s: &str) -> bool {
    match s.chars().next() {
        Some(head) if !head.is_ascii_digit() => s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')),
        _ => false,
    }
}
