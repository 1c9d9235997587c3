//! Link-time method registration via `inventory`.

use super::CatalogBuilder;
use std::any::Any;
use verso_core::BoxMethod;

/// A method submitted with [`export_method!`](crate::export_method).
///
/// The factory returns a type-erased [`BoxMethod`]; catalogs only pick up
/// registrations whose input and output types match their own.
pub struct MethodRegistration {
    /// Entry symbol the method is exported under.
    pub symbol: &'static str,
    /// Constructs the erased method.
    pub factory: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(MethodRegistration);

/// Export a method under an entry symbol.
///
/// ```rust,ignore
/// verso::export_method!("users.create", Request => Response, create_user);
///
/// let catalog = CatalogBuilder::<Request, Response>::from_inventory().build();
/// ```
#[macro_export]
macro_rules! export_method {
    ($symbol:expr, $in:ty => $out:ty, $method:expr $(,)?) => {
        const _: () = {
            fn factory() -> ::std::boxed::Box<dyn ::std::any::Any + Send + Sync> {
                let method: $crate::verso_core::BoxMethod<$in, $out> =
                    $crate::verso_core::boxed($method);
                ::std::boxed::Box::new(method)
            }

            $crate::inventory::submit! {
                $crate::loader::MethodRegistration {
                    symbol: $symbol,
                    factory,
                }
            }
        };
    };
}

impl<In, Out> CatalogBuilder<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    /// Start from every method exported for `In -> Out`.
    ///
    /// Registrations for other types are ignored.
    pub fn from_inventory() -> Self {
        let mut builder = Self::new();
        for registration in inventory::iter::<MethodRegistration> {
            match (registration.factory)().downcast::<BoxMethod<In, Out>>() {
                Ok(method) => builder.register_boxed_mut(registration.symbol, *method),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        symbol = registration.symbol,
                        "exported method has other types, skipped"
                    );
                }
            }
        }
        builder
    }
}
