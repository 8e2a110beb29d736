//! Positional argument substitution
//!
//! Placeholders are `%1` through `%9`, each naming a 1-based argument.
//! Replacement is a single left-to-right pass driven by the placeholder
//! digit, so placeholders may appear in any order and any number of times.
//! A `%` not followed by `1`..`9` is copied literally.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::utils::errors::SubstitutionError;

/// A substitution argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Arg {
    /// Count used for plural selection, if this argument is numeric
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Arg::Int(n) => Some(n.unsigned_abs()),
            Arg::UInt(n) => Some(*n),
            Arg::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f.abs() as u64),
            Arg::Float(_) => None,
            Arg::Text(text) => text.trim().parse::<i64>().ok().map(i64::unsigned_abs),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(n) => write!(f, "{}", n),
            Arg::UInt(n) => write!(f, "{}", n),
            Arg::Float(n) => write!(f, "{}", n),
            Arg::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! arg_from {
    ($variant:ident: $($ty:ty),+) => {
        $(impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Arg::$variant(value.into())
            }
        })+
    };
}

arg_from!(Int: i8, i16, i32, i64);
arg_from!(UInt: u8, u16, u32, u64);
arg_from!(Float: f32, f64);
arg_from!(Text: String, &str);

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

/// What to emit when a placeholder names a missing argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingArgument {
    /// Keep the placeholder text, e.g. `%3`
    #[default]
    Literal,
    /// Drop the placeholder
    Empty,
    /// Keep the placeholder and report the problem as a failure to strict callers
    Error,
}

/// Replace `%1`..`%9` in `text` with `args`, collecting missing-argument problems
pub fn substitute(
    text: &str,
    args: &[Arg],
    missing: MissingArgument,
    errors: &mut Vec<SubstitutionError>,
) -> String {
    let mut out = String::with_capacity(text.len() + args.len() * 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let digit = match chars.peek() {
            Some(&d @ '1'..='9') => d,
            _ => {
                out.push('%');
                continue;
            }
        };
        chars.next();

        let index = digit as usize - '0' as usize;
        match args.get(index - 1) {
            Some(arg) => {
                let _ = write!(out, "{}", arg);
            }
            None => {
                errors.push(SubstitutionError::MissingArgument {
                    index,
                    supplied: args.len(),
                });
                if missing != MissingArgument::Empty {
                    out.push('%');
                    out.push(digit);
                }
            }
        }
    }

    out
}
