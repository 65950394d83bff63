//! Mapping between filter enums and the literal strings the API expects.
//!
//! Every filterable value in Shiori (anime types, statuses, sort keys, sort
//! directions, genres, ...) is a closed Rust enum implementing [`WireEnum`]. Each
//! member carries:
//!
//! - a declared integer (`raw`), which for genres is the MyAnimeList genre ID and
//!   for everything else is the member's position in the declaration,
//! - exactly one wire string, the token written into the query string.
//!
//! "No filter" is not an enum member. Config fields hold `Option<E>` and `None`
//! means the parameter is left out; [`description_of`] maps `None` to the empty
//! string, which the query composer treats as "omit".
//!
//! # Examples
//!
//! ```rust
//! use shiori::wire::{description_of, WireEnum};
//! use shiori::filters::{AnimeGenre, SortDirection};
//!
//! assert_eq!(SortDirection::Descending.wire(), "desc");
//! assert_eq!(description_of(Some(AnimeGenre::Comedy)), "4");
//! assert_eq!(description_of::<AnimeGenre>(None), "");
//! assert_eq!(AnimeGenre::from_raw(1), Some(AnimeGenre::Action));
//! assert_eq!(AnimeGenre::from_raw(i32::MAX as i64), None);
//! ```

/// An enum whose members map one-to-one onto API wire strings.
///
/// Implementations are generated by the crate-internal `wire_enum!` macro, which
/// also derives `Display`, `FromStr`, `TryFrom<i64>` and serde support from the
/// same table.
pub trait WireEnum: Copy + Eq + Sized + 'static {
    /// Type name used in validation messages.
    const NAME: &'static str;

    /// Every declared member, in declaration order.
    const ALL: &'static [Self];

    /// The literal string sent to the API for this member.
    fn wire(&self) -> &'static str;

    /// The declared integer behind this member.
    fn raw(&self) -> i64;

    /// Looks up a member by its declared integer.
    fn from_raw(raw: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.raw() == raw)
    }

    /// Looks up a member by its wire string (ASCII case-insensitive).
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.wire().eq_ignore_ascii_case(value))
    }
}

/// Returns the wire string for an optional filter value.
///
/// `None` stands for "no filter" and resolves to the empty string, which callers
/// must read as "leave this parameter out" rather than "send `key=`".
pub fn description_of<E: WireEnum>(value: Option<E>) -> &'static str {
    value.map_or("", |member| member.wire())
}

/// Declares a wire enum and derives its trait implementations from one table.
///
/// ```ignore
/// wire_enum! {
///     /// Sort direction.
///     pub enum SortDirection {
///         Ascending = 0 => "asc",
///         Descending = 1 => "desc",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $raw:literal => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $raw,
            )+
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn wire(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            fn raw(&self) -> i64 {
                *self as i64
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::wire::WireEnum::wire(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
                <Self as $crate::wire::WireEnum>::from_wire(value).ok_or_else(|| {
                    $crate::error::Error::validation(
                        stringify!($name),
                        format!("unknown value {:?}", value),
                    )
                })
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::error::Error;

            fn try_from(raw: i64) -> std::result::Result<Self, Self::Error> {
                $crate::guard::ensure_defined(raw, stringify!($name))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::wire::WireEnum::wire(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                <Self as $crate::wire::WireEnum>::from_wire(&value).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} value {:?}",
                        stringify!($name),
                        value
                    ))
                })
            }
        }
    };
}

pub(crate) use wire_enum;
