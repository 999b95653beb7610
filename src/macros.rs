//! Macros for declaring simple enum states.

/// Declare a fieldless enum usable as a state.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`
/// and serde's traits, implements [`State`](crate::core::State) with no-op
/// hooks, and gets a stable name/ordinal mapping:
///
/// - `ALL`: every variant in declaration order
/// - `name()` / `from_name()`
/// - `ordinal()` / `from_ordinal()`
///
/// Serde is reached through this crate, so callers do not need their own
/// `serde` dependency.
///
/// # Example
///
/// ```
/// use viewstate::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Amber,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::Amber.name(), "Amber");
/// assert_eq!(Light::Amber.ordinal(), 1);
/// assert_eq!(Light::from_ordinal(2), Some(Light::Green));
/// assert_eq!(Light::from_name("Red"), Some(Light::Red));
/// assert_eq!(Light::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::serde::Serialize,
            $crate::serde::Deserialize,
        )]
        #[serde(crate = "viewstate::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Stable variant name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            /// Position of the variant in declaration order.
            pub fn ordinal(&self) -> usize {
                Self::ALL
                    .iter()
                    .position(|candidate| candidate == self)
                    .unwrap_or_default()
            }

            pub fn from_ordinal(ordinal: usize) -> Option<Self> {
                Self::ALL.get(ordinal).copied()
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|candidate| candidate.name() == name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                $name::name(self)
            }
        }
    };
}
