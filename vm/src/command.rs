use arch::mem::{ADDR_MASK, POINTER_SIZE, STATIC_SIZE, TEMP_SIZE};
use arch::reg::Reg;
use strum::{Display, EnumString};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArithOp {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Segment {
    Constant,
    Local,
    Argument,
    This,
    That,
    Static,
    Pointer,
    Temp,
}

/// Segments backed by RAM: every segment except `constant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MemSegment {
    Local,
    Argument,
    This,
    That,
    Static,
    Pointer,
    Temp,
}

impl From<MemSegment> for Segment {
    fn from(seg: MemSegment) -> Self {
        match seg {
            MemSegment::Local => Segment::Local,
            MemSegment::Argument => Segment::Argument,
            MemSegment::This => Segment::This,
            MemSegment::That => Segment::That,
            MemSegment::Static => Segment::Static,
            MemSegment::Pointer => Segment::Pointer,
            MemSegment::Temp => Segment::Temp,
        }
    }
}

impl Segment {
    pub fn memory(self) -> Option<MemSegment> {
        match self {
            Segment::Constant => None,
            Segment::Local => Some(MemSegment::Local),
            Segment::Argument => Some(MemSegment::Argument),
            Segment::This => Some(MemSegment::This),
            Segment::That => Some(MemSegment::That),
            Segment::Static => Some(MemSegment::Static),
            Segment::Pointer => Some(MemSegment::Pointer),
            Segment::Temp => Some(MemSegment::Temp),
        }
    }

    /// Largest valid index, for segments of fixed size.
    fn max_index(self) -> Option<u16> {
        match self {
            Segment::Constant => Some(ADDR_MASK),
            Segment::Static => Some(STATIC_SIZE - 1),
            Segment::Pointer => Some(POINTER_SIZE - 1),
            Segment::Temp => Some(TEMP_SIZE - 1),
            Segment::Local | Segment::Argument | Segment::This | Segment::That => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Arith(ArithOp),
    Push(Segment, u16),
    /// Only RAM segments can be popped into.
    Pop(MemSegment, u16),
    Label(String),
    Goto(String),
    IfGoto(String),
    Function(String, u16),
    Call(String, u16),
    Return,
}

impl Command {
    /// Parse one line of VM code. Blank and comment-only lines give `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, Error> {
        let code = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let words: Vec<&str> = code.split_whitespace().collect();
        let Some((op, args)) = words.split_first() else {
            return Ok(None);
        };
        let op: &str = op;

        // Get argument by index and parse it with the given function
        // Example: arg!(0, segment) -> Segment
        macro_rules! arg {
            ($index:expr, $parse:ident) => {{
                let arg = args
                    .get($index)
                    .ok_or_else(|| Error::MissingArgument(op.to_string()))?;
                $parse(arg)?
            }};
        }

        let arity = match op {
            "add" | "sub" | "neg" | "eq" | "gt" | "lt" | "and" | "or" | "not" | "return" => 0,
            "label" | "goto" | "if-goto" => 1,
            "push" | "pop" | "function" | "call" => 2,
            _ => return Err(Error::UnknownCommand(op.to_string())),
        };
        if args.len() > arity {
            return Err(Error::TooManyArguments(op.to_string()));
        }

        let cmd = match op {
            "return" => Command::Return,
            "label" => Command::Label(arg!(0, label)),
            "goto" => Command::Goto(arg!(0, label)),
            "if-goto" => Command::IfGoto(arg!(0, label)),
            "push" => {
                let (seg, idx) = (arg!(0, segment), arg!(1, count));
                Command::Push(seg, check_index(seg, idx)?)
            }
            "pop" => {
                let (seg, idx) = (arg!(0, segment), arg!(1, count));
                let mem = seg.memory().ok_or(Error::PopConstant)?;
                Command::Pop(mem, check_index(seg, idx)?)
            }
            "function" => Command::Function(arg!(0, label), arg!(1, count)),
            "call" => Command::Call(arg!(0, label), arg!(1, count)),
            _ => match op.parse::<ArithOp>() {
                Ok(arith) => Command::Arith(arith),
                Err(_) => return Err(Error::UnknownCommand(op.to_string())),
            },
        };
        Ok(Some(cmd))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Arith(op) => write!(f, "{}", op),
            Command::Push(seg, idx) => write!(f, "push {} {}", seg, idx),
            Command::Pop(seg, idx) => write!(f, "pop {} {}", seg, idx),
            Command::Label(name) => write!(f, "label {}", name),
            Command::Goto(name) => write!(f, "goto {}", name),
            Command::IfGoto(name) => write!(f, "if-goto {}", name),
            Command::Function(name, n) => write!(f, "function {} {}", name, n),
            Command::Call(name, n) => write!(f, "call {} {}", name, n),
            Command::Return => write!(f, "return"),
        }
    }
}

fn segment(s: &str) -> Result<Segment, Error> {
    s.parse::<Segment>()
        .map_err(|_| Error::UnknownSegment(s.to_string()))
}

fn count(s: &str) -> Result<u16, Error> {
    s.parse::<u16>().map_err(|_| Error::ParseCount(s.to_string()))
}

/// Label and function names become assembler symbols verbatim, so they must
/// not collide with a register alias or a predefined name.
fn label(s: &str) -> Result<String, Error> {
    let valid = match s.chars().next() {
        Some(head) if !head.is_ascii_digit() => s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')),
        _ => false,
    };
    match valid && !is_reserved(s) {
        true => Ok(s.to_string()),
        false => Err(Error::InvalidLabel(s.to_string())),
    }
}

/// `R<digits>`, the virtual registers, `SCREEN` and `KBD`.
fn is_reserved(s: &str) -> bool {
    let alias = s
        .strip_prefix('R')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    alias || Reg::parse(s).is_ok() || matches!(s, "SCREEN" | "KBD")
}

fn check_index(seg: Segment, idx: u16) -> Result<u16, Error> {
    match seg.max_index() {
        Some(max) if idx > max => Err(Error::IndexOutOfRange(seg, idx)),
        _ => Ok(idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! case {
        ($($name:ident: $line:expr => $expect:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Command::parse($line).ok(), Some($expect));
                }
            )*
        }
    }

    case! {
        blank: "   " => None,
        comment: "// push constant 1" => None,
        add: "add" => Some(Command::Arith(ArithOp::Add)),
        not_with_comment: "not   // invert" => Some(Command::Arith(ArithOp::Not)),
        ret: "return" => Some(Command::Return),
        label: "label LOOP_START" => Some(Command::Label("LOOP_START".to_string())),
        goto: "goto END" => Some(Command::Goto("END".to_string())),
        if_goto: "if-goto Main.loop$1" => Some(Command::IfGoto("Main.loop$1".to_string())),
        push: "push constant 7" => Some(Command::Push(Segment::Constant, 7)),
        push_tabs: "push\tlocal \t 2\r" => Some(Command::Push(Segment::Local, 2)),
        pop: "pop that 5" => Some(Command::Pop(MemSegment::That, 5)),
        pop_pointer: "pop pointer 1" => Some(Command::Pop(MemSegment::Pointer, 1)),
        label_like_register: "label RET" => Some(Command::Label("RET".to_string())),
        label_r_prefix: "goto R3a" => Some(Command::Goto("R3a".to_string())),
        function: "function Main.fib 2" => Some(Command::Function("Main.fib".to_string(), 2)),
        call: "call Math.multiply 2" => Some(Command::Call("Math.multiply".to_string(), 2)),
    }

    fn error(line: &str) -> Option<Error> {
        Command::parse(line).err()
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(error("mul"), Some(Error::UnknownCommand(_))));
        assert!(matches!(error("Push constant 1"), Some(Error::UnknownCommand(_))));
    }

    #[test]
    fn arity() {
        assert!(matches!(error("push constant"), Some(Error::MissingArgument(_))));
        assert!(matches!(error("goto"), Some(Error::MissingArgument(_))));
        assert!(matches!(error("add 1"), Some(Error::TooManyArguments(_))));
        assert!(matches!(error("call f 1 2"), Some(Error::TooManyArguments(_))));
    }

    #[test]
    fn malformed_count() {
        assert!(matches!(error("push constant x"), Some(Error::ParseCount(_))));
        assert!(matches!(error("push local -1"), Some(Error::ParseCount(_))));
        assert!(matches!(error("function f n"), Some(Error::ParseCount(_))));
        assert!(matches!(error("call f 1.5"), Some(Error::ParseCount(_))));
    }

    #[test]
    fn unknown_segment() {
        assert!(matches!(error("push locals 0"), Some(Error::UnknownSegment(_))));
        assert!(matches!(error("pop heap 0"), Some(Error::UnknownSegment(_))));
    }

    #[test]
    fn pop_constant() {
        assert!(matches!(error("pop constant 0"), Some(Error::PopConstant)));
        assert_eq!(Segment::Constant.memory(), None);
        assert_eq!(Segment::Temp.memory().map(Segment::from), Some(Segment::Temp));
    }

    #[test]
    fn index_range() {
        assert!(matches!(
            error("push pointer 2"),
            Some(Error::IndexOutOfRange(Segment::Pointer, 2))
        ));
        assert!(matches!(
            error("pop temp 8"),
            Some(Error::IndexOutOfRange(Segment::Temp, 8))
        ));
        assert!(matches!(
            error("push static 240"),
            Some(Error::IndexOutOfRange(Segment::Static, 240))
        ));
        assert!(matches!(
            error("push constant 32768"),
            Some(Error::IndexOutOfRange(Segment::Constant, 32768))
        ));
        assert!(Command::parse("push temp 7").is_ok());
        assert!(Command::parse("push local 1000").is_ok());
    }

    #[test]
    fn invalid_label() {
        assert!(matches!(error("label 1ABC"), Some(Error::InvalidLabel(_))));
        assert!(matches!(error("goto a-b"), Some(Error::InvalidLabel(_))));
        assert!(matches!(error("goto R3"), Some(Error::InvalidLabel(_))));
    }

    #[test]
    fn reserved_names_are_not_labels() {
        for line in [
            "goto R3",
            "if-goto R15",
            "label R0",
            "call R3 1",
            "function R12 0",
            "label SP",
            "goto LCL",
            "call ARG 0",
            "function THIS 0",
            "if-goto THAT",
            "label SCREEN",
            "goto KBD",
        ] {
            assert!(matches!(error(line), Some(Error::InvalidLabel(_))), "{}", line);
        }
    }

    #[test]
    fn display_round_trips_text() {
        for line in ["push argument 3", "if-goto L", "call f 0", "eq", "return"] {
            let cmd = Command::parse(line).ok().flatten();
            assert_eq!(cmd.map(|c| c.to_string()).as_deref(), Some(line));
        }
    }
}
