//! Registration macros for slot tables.

/// Declares a crate's slot table.
///
/// Implements [`SlotMember`](crate::SlotMember) for every listed member and
/// generates two functions: a bootstrap function that declares each slot and binds
/// its members, and a self-check that fails unless a sealed registry knows every
/// member under every listed slot.
///
/// Members are registered under `crate_name::MemberName`, taken from the source
/// tokens, so identifiers do not depend on compiler type-name output.
///
/// ```ignore
/// mortar_registry::slot_table! {
/// 	pub fn register_nodes, pub fn check_nodes;
/// 	StatementSlot => [IfStatement, ReturnStatement],
/// 	ExpressionSlot => [Identifier, CallExpression],
/// }
/// ```
#[macro_export]
macro_rules! slot_table {
	(
		$vis:vis fn $name:ident, $check_vis:vis fn $check:ident;
		$($slot:ty => [$($member:ident),+ $(,)?]),+ $(,)?
	) => {
		$($(
			impl $crate::SlotMember<$slot> for $member {
				fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<<$slot as $crate::Slot>::Object> {
					self
				}
			}
		)+)+

		$vis fn $name(
			builder: &mut $crate::RegistryBuilder,
		) -> ::core::result::Result<(), $crate::RegistryError> {
			$(builder.declare_slot::<$slot>();)+
			$($(
				builder.register_as::<$member>(::core::concat!(
					::core::env!("CARGO_CRATE_NAME"),
					"::",
					::core::stringify!($member),
				))?;
				builder.bind::<$slot, $member>()?;
			)+)+
			::core::result::Result::Ok(())
		}

		$check_vis fn $check(
			registry: &$crate::TypeRegistry,
		) -> ::core::result::Result<(), $crate::RegistryError> {
			$($(
				let bound = registry
					.members::<$slot>()
					.any(|t| t.type_id() == ::std::any::TypeId::of::<$member>());
				if !bound {
					return ::core::result::Result::Err($crate::RegistryError::Unbound {
						slot: <$slot as $crate::Slot>::NAME,
						type_name: ::std::any::type_name::<$member>(),
					});
				}
			)+)+
			::core::result::Result::Ok(())
		}
	};
}

/// Submits a bootstrap function to the process-wide registry.
///
/// The function runs when the process-wide registry is first sealed.
#[macro_export]
macro_rules! submit_registration {
	($register:path) => {
		$crate::__private::inventory::submit! {
			$crate::Registration::new(env!("CARGO_PKG_NAME"), $register)
		}
	};
}
