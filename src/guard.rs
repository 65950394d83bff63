//! Precondition checks shared by every search config.
//!
//! Each guard takes the value under test plus the name of the field it came from,
//! and either hands the value back or fails with [`Error::Validation`] naming that
//! field. Guards are pure and independent of each other; the config decides the
//! order in which its fields are checked, and `?` makes the first failure final.
//!
//! # Examples
//!
//! ```rust
//! use shiori::guard;
//!
//! assert_eq!(guard::ensure_positive(3u32, "page").unwrap(), 3);
//! assert!(guard::ensure_positive(0u32, "page").is_err());
//! assert!(guard::ensure_at_most(30u32, 25, "limit").is_err());
//! assert!(guard::ensure_letter('A', "letter").is_ok());
//! assert!(guard::ensure_letter('1', "letter").is_err());
//! ```

use std::fmt::Display;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::{
    error::{Error, Result},
    wire::WireEnum,
};

/// Fails unless `value` is strictly greater than zero.
pub fn ensure_positive<T>(value: T, field: &str) -> Result<T>
where
    T: PartialOrd + Default + Display + Copy,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(Error::validation(
            field,
            format!("must be greater than zero, got {}", value),
        ))
    }
}

/// Fails if `value` exceeds `max`.
pub fn ensure_at_most<T>(value: T, max: T, field: &str) -> Result<T>
where
    T: PartialOrd + Display + Copy,
{
    if value > max {
        Err(Error::validation(
            field,
            format!("must be at most {}, got {}", max, value),
        ))
    } else {
        Ok(value)
    }
}

/// Fails unless `min <= value <= max`.
///
/// Comparisons against NaN are false, so a NaN score is rejected as well.
pub fn ensure_in_range<T>(value: T, min: T, max: T, field: &str) -> Result<T>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(Error::validation(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ))
    }
}

/// Fails if both bounds are present and `low` is greater than `high`.
pub fn ensure_ordered<T>(low: Option<T>, high: Option<T>, field: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    match (low, high) {
        (Some(low), Some(high)) if low > high => Err(Error::validation(
            field,
            format!("lower bound {} is greater than upper bound {}", low, high),
        )),
        _ => Ok(()),
    }
}

/// Fails unless `value` belongs to one of the Unicode letter categories
/// (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`).
///
/// Letter numerals like `Ⅻ` and combining marks are Alphabetic in Unicode but
/// are not letters, so they fail here along with digits and punctuation.
pub fn ensure_letter(value: char, field: &str) -> Result<char> {
    let is_letter = matches!(
        get_general_category(value),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    );
    if is_letter {
        Ok(value)
    } else {
        Err(Error::validation(
            field,
            format!("must be a single letter, got {:?}", value),
        ))
    }
}

/// Fails if `value` is empty or consists only of whitespace.
pub fn ensure_not_blank<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::validation(field, "must not be blank"))
    } else {
        Ok(value)
    }
}

/// Resolves a raw integer into a declared member of `E`.
///
/// Wire enums are closed, so this is the only way an integer from outside the
/// type system (an ID stored in a database, a number typed on a command line)
/// becomes an enum value.
///
/// # Examples
///
/// ```rust
/// use shiori::{guard, filters::AnimeGenre};
///
/// let genre: AnimeGenre = guard::ensure_defined(4, "genres").unwrap();
/// assert_eq!(genre, AnimeGenre::Comedy);
///
/// let err = guard::ensure_defined::<AnimeGenre>(i32::MAX as i64, "genres").unwrap_err();
/// assert_eq!(err.field(), Some("genres"));
/// ```
pub fn ensure_defined<E: WireEnum>(raw: i64, field: &str) -> Result<E> {
    E::from_raw(raw).ok_or_else(|| {
        Error::validation(
            field,
            format!("{} is not a declared {} value", raw, E::NAME),
        )
    })
}
