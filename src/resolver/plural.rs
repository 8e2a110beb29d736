//! Plural rules
//!
//! Which plural categories a locale distinguishes, and which category a
//! count falls into, is locale reference data. The resolver only talks to
//! the [`PluralRules`] capability; [`BuiltinPluralRules`] covers the common
//! language families and can be replaced by the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        };
        f.write_str(name)
    }
}

/// Plural rule capability supplied to the resolver
pub trait PluralRules: Send + Sync {
    /// Category a count maps to in `locale`
    fn category_for(&self, locale: &str, count: u64) -> PluralCategory;

    /// Categories distinguished by `locale`, in plural variant order
    fn categories(&self, locale: &str) -> &'static [PluralCategory];

    /// Position of the variant serving `count`, if the locale lists its category
    fn variant_index(&self, locale: &str, count: u64) -> Option<usize> {
        let category = self.category_for(locale, count);
        self.categories(locale).iter().position(|c| *c == category)
    }
}

use PluralCategory::{Few, Many, One, Other, Two, Zero};

/// Language families with distinct integer plural behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    /// one: n = 1
    English,
    /// one: n = 0 or 1
    French,
    /// one / few / many by last digits
    EastSlavic,
    Polish,
    /// one: 1, few: 2..4
    Czech,
    Arabic,
    /// no plural distinction
    Invariant,
}

impl Family {
    fn of(locale: &str) -> Self {
        match primary_language(locale).as_str() {
            "fr" | "ff" | "kab" | "hy" => Family::French,
            "ru" | "uk" | "be" => Family::EastSlavic,
            "pl" => Family::Polish,
            "cs" | "sk" => Family::Czech,
            "ar" => Family::Arabic,
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" => Family::Invariant,
            _ => Family::English,
        }
    }

    fn categories(self) -> &'static [PluralCategory] {
        match self {
            Family::English | Family::French => &[One, Other],
            Family::EastSlavic | Family::Polish => &[One, Few, Many],
            Family::Czech => &[One, Few, Other],
            Family::Arabic => &[Zero, One, Two, Few, Many, Other],
            Family::Invariant => &[Other],
        }
    }

    fn category(self, n: u64) -> PluralCategory {
        let last_digit = n % 10;
        let last_two = n % 100;

        match self {
            Family::English => {
                if n == 1 { One } else { Other }
            }
            Family::French => {
                if n <= 1 { One } else { Other }
            }
            Family::EastSlavic => {
                if last_digit == 1 && last_two != 11 {
                    One
                } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two) {
                    Few
                } else {
                    Many
                }
            }
            Family::Polish => {
                if n == 1 {
                    One
                } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two) {
                    Few
                } else {
                    Many
                }
            }
            Family::Czech => match n {
                1 => One,
                2..=4 => Few,
                _ => Other,
            },
            Family::Arabic => match n {
                0 => Zero,
                1 => One,
                2 => Two,
                _ if (3..=10).contains(&last_two) => Few,
                _ if (11..=99).contains(&last_two) => Many,
                _ => Other,
            },
            Family::Invariant => Other,
        }
    }
}

/// Built-in integer plural rules for common languages
///
/// Unknown languages use the English rule (`one` for 1, `other` otherwise).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPluralRules;

impl PluralRules for BuiltinPluralRules {
    fn category_for(&self, locale: &str, count: u64) -> PluralCategory {
        Family::of(locale).category(count)
    }

    fn categories(&self, locale: &str) -> &'static [PluralCategory] {
        Family::of(locale).categories()
    }
}

/// Lowercased language subtag of a locale (`"fr_FR"` -> `"fr"`)
pub fn primary_language(locale: &str) -> String {
    locale
        .split(['_', '-'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}
