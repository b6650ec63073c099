//! Macros for declaring closed plotter enumerations.

/// Declare a fieldless enum and generate its `State` implementation.
///
/// The generated enum is `Copy`, comparable, hashable and serializable,
/// carries an `ALL` constant listing every variant in declaration order,
/// and reports the variant identifier from `State::name`.
///
/// # Example
///
/// ```
/// use penplot::state_enum;
/// use penplot::core::State;
///
/// state_enum! {
///     pub enum Nib {
///         Fine,
///         Broad,
///     }
/// }
///
/// assert_eq!(Nib::Broad.name(), "Broad");
/// assert_eq!(Nib::ALL, &[Nib::Fine, Nib::Broad]);
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
