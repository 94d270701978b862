//! Registration macros.

/// Declares a self-registering [`Registrar`](crate::Registrar) for a concrete type.
///
/// ```ignore
/// registrar!(dyn Codec, Rot13, "rot13");
/// registrar!(dyn Codec, Xor, "xor-7f", || Xor::with_key(0x7f));
/// ```
///
/// The first form builds the type with [`Default::default`]; the second calls
/// the given zero-argument constructor. Either way the macro creates the
/// `static` registrar and the `inventory` linkage that [`crate::startup`]
/// installs, so linking the declaring module is all it takes to make the
/// identifier available.
#[macro_export]
macro_rules! registrar {
	($base:ty, $derived:ty, $id:expr $(,)?) => {
		$crate::registrar!($base, $derived, $id, <$derived as ::core::default::Default>::default);
	};
	($base:ty, $derived:ty, $id:expr, $ctor:expr $(,)?) => {
		const _: () = {
			static REGISTRAR: $crate::Registrar<$base, $derived> =
				$crate::Registrar::new($id, || -> ::std::boxed::Box<$base> {
					let derived: $derived = ($ctor)();
					::std::boxed::Box::new(derived)
				});

			$crate::inventory::submit! {
				$crate::Submission {
					base: ::core::stringify!($base),
					id: $id,
					derived: ::core::stringify!($derived),
					module: ::core::module_path!(),
					install: |table| REGISTRAR.register_into(&table.registry::<$base>()),
				}
			}
		};
	};
}
