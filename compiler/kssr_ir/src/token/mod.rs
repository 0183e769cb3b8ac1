//! Lexical token tags for leaf nodes.
//!
//! Leaf tokens (keywords, modifiers, operators, identifiers) compare by tag
//! identity. Operator-carrying nodes (binary, prefix, postfix) store the tag
//! of their operation token directly.

/// Compact discriminant for a Kotlin leaf token.
///
/// | Range   | Category    |
/// |---------|-------------|
/// | 0-9     | Names and literals |
/// | 10-39   | Keywords    |
/// | 40-69   | Modifiers   |
/// | 70-127  | Operators   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    // === Names and literals (0-9) ===
    Identifier = 0,
    IntegerLiteral = 1,
    FloatLiteral = 2,
    CharLiteral = 3,

    // === Keywords (10-39) ===
    KwClass = 10,
    KwInterface = 11,
    KwObject = 12,
    KwFun = 13,
    KwVal = 14,
    KwVar = 15,
    KwIf = 16,
    KwElse = 17,
    KwReturn = 18,
    KwBreak = 19,
    KwContinue = 20,
    KwThis = 21,
    KwSuper = 22,
    KwNull = 23,
    KwTrue = 24,
    KwFalse = 25,

    // === Modifiers (40-69) ===
    Public = 40,
    Private = 41,
    Protected = 42,
    Internal = 43,
    Open = 44,
    Final = 45,
    Abstract = 46,
    Sealed = 47,
    Override = 48,
    Data = 49,
    Enum = 50,
    Inline = 51,
    Lateinit = 52,
    Const = 53,
    Vararg = 54,
    Suspend = 55,

    // === Operators (70-127) ===
    Plus = 70,
    Minus = 71,
    Mul = 72,
    Div = 73,
    Perc = 74,
    PlusPlus = 75,
    MinusMinus = 76,
    Excl = 77,
    ExclExcl = 78,
    AndAnd = 79,
    OrOr = 80,
    EqEq = 81,
    ExclEq = 82,
    EqEqEq = 83,
    ExclEqEq = 84,
    Lt = 85,
    Gt = 86,
    LtEq = 87,
    GtEq = 88,
    Eq = 89,
    PlusEq = 90,
    MinusEq = 91,
    MulEq = 92,
    DivEq = 93,
    PercEq = 94,
    Range = 95,
    Elvis = 96,
    KwIn = 97,
    NotIn = 98,
    KwIs = 99,
    NotIs = 100,
    KwAs = 101,
    AsSafe = 102,
}

impl TokenTag {
    /// Fixed source text, or `None` for tags whose text varies
    /// (identifiers and literals).
    pub const fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            Self::Identifier | Self::IntegerLiteral | Self::FloatLiteral | Self::CharLiteral => {
                return None
            }
            Self::KwClass => "class",
            Self::KwInterface => "interface",
            Self::KwObject => "object",
            Self::KwFun => "fun",
            Self::KwVal => "val",
            Self::KwVar => "var",
            Self::KwIf => "if",
            Self::KwElse => "else",
            Self::KwReturn => "return",
            Self::KwBreak => "break",
            Self::KwContinue => "continue",
            Self::KwThis => "this",
            Self::KwSuper => "super",
            Self::KwNull => "null",
            Self::KwTrue => "true",
            Self::KwFalse => "false",
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Open => "open",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::Override => "override",
            Self::Data => "data",
            Self::Enum => "enum",
            Self::Inline => "inline",
            Self::Lateinit => "lateinit",
            Self::Const => "const",
            Self::Vararg => "vararg",
            Self::Suspend => "suspend",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Perc => "%",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Excl => "!",
            Self::ExclExcl => "!!",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::EqEq => "==",
            Self::ExclEq => "!=",
            Self::EqEqEq => "===",
            Self::ExclEqEq => "!==",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::MulEq => "*=",
            Self::DivEq => "/=",
            Self::PercEq => "%=",
            Self::Range => "..",
            Self::Elvis => "?:",
            Self::KwIn => "in",
            Self::NotIn => "!in",
            Self::KwIs => "is",
            Self::NotIs => "!is",
            Self::KwAs => "as",
            Self::AsSafe => "as?",
        };
        Some(text)
    }
}
