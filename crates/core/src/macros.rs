// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the domain types.

/// `Display` for a fieldless enum, one string literal per variant.
///
/// ```ignore
/// crate::simple_display! {
///     View {
///         Metrics => "metrics",
///         Dashboard => "dashboard",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant => $str, )+
                })
            }
        }
    };
}

/// Chainable setters inside an existing `impl` block. `into` fields take
/// `impl Into<T>`, `set` fields take `T`.
///
/// ```ignore
/// impl EngineConfig {
///     soa_core::setters! {
///         into { api_url: String }
///         set { poll_interval: Duration }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into {
            $( $into_field:ident : $into_ty:ty ),* $(,)?
        })?
        $(set {
            $( $set_field:ident : $set_ty:ty ),* $(,)?
        })?
    ) => {
        $($(
            pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self {
                self.$into_field = v.into();
                self
            }
        )*)?

        $($(
            pub fn $set_field(mut self, v: $set_ty) -> Self {
                self.$set_field = v;
                self
            }
        )*)?
    };
}

/// Test-only builder for a plain struct: every field gets a default and a
/// [`setters!`] setter, and `Target::builder()` starts from the defaults.
/// Only compiled under `test` or the `test-support` feature.
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            into {
                $( $into_field:ident : $into_ty:ty = $into_default:expr ),* $(,)?
            }
            set {
                $( $set_field:ident : $set_ty:ty = $set_default:expr ),* $(,)?
            }
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            $( $into_field: $into_ty, )*
            $( $set_field: $set_ty, )*
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                Self {
                    $( $into_field: $into_default.into(), )*
                    $( $set_field: $set_default, )*
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $crate::setters! {
                into { $( $into_field: $into_ty ),* }
                set { $( $set_field: $set_ty ),* }
            }

            pub fn build(self) -> $target {
                $target {
                    $( $into_field: self.$into_field, )*
                    $( $set_field: self.$set_field, )*
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}
