//! Process-wide registry: bootstrap, then seal.
//!
//! # Lifecycle
//!
//! 1. **Bootstrap:** [`declare_slot`], [`register_type_of`] and [`bind`] write into a
//!    pending [`RegistryBuilder`]. Crates that own slot tables submit a
//!    [`Registration`] through `inventory` instead of calling these directly.
//! 2. **Seal:** the first [`registry`] (or an explicit [`seal`]) applies every
//!    submitted [`Registration`], freezes the builder and publishes the result.
//! 3. **Traffic:** lookups go through the sealed [`TypeRegistry`] without locking.
//!
//! # Invariants
//!
//! - A registration observed after sealing is rejected with [`RegistryError::Sealed`].
//!   - Enforced in: `ProcessRegistry::with_pending` (flag checked under the bootstrap lock).
//!   - Failure symptom: a type registered too late silently fails to decode.
//! - An identifier collision aborts bootstrap.
//!   - Enforced in: `ProcessRegistry::with_pending` (records the collision) and
//!     [`ProcessRegistry::seal`] (panics after logging).
//!   - Failure symptom: payloads of one type decoded as another.
//! - A failed seal stays failed.
//!   - Enforced in: `ProcessRegistry::build` (the failure is kept in the pending state).
//!   - Failure symptom: a retry publishes a registry missing every bootstrap type.

use std::sync::OnceLock;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::builder::RegistryBuilder;
use crate::error::RegistryError;
use crate::registry::TypeRegistry;
use crate::slot::{Slot, SlotMember, Storable};

/// Bootstrap function contributed by a crate.
pub type RegisterFn = fn(&mut RegistryBuilder) -> Result<(), RegistryError>;

/// Static registration entry collected via `inventory`.
pub struct Registration {
	/// Crate that submitted the entry.
	pub origin: &'static str,
	/// Declares and binds the crate's slot table.
	pub register: RegisterFn,
}

impl Registration {
	/// Creates a registration entry.
	pub const fn new(origin: &'static str, register: RegisterFn) -> Self {
		Self { origin, register }
	}
}

inventory::collect!(Registration);

/// Options for a [`ProcessRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
	/// Label used in logs and errors.
	pub label: &'static str,
	/// Fail sealing when a declared slot has no members.
	pub require_members: bool,
	/// Apply `inventory`-submitted [`Registration`]s when sealing.
	pub collect_static: bool,
}

impl RegistryOptions {
	/// Options of the process-wide registry.
	pub const DEFAULT: Self = Self {
		label: "types",
		require_members: false,
		collect_static: true,
	};

	fn builder(&self) -> RegistryBuilder {
		RegistryBuilder::new(self.label).require_members(self.require_members)
	}
}

impl Default for RegistryOptions {
	fn default() -> Self {
		Self::DEFAULT
	}
}

struct Pending {
	builder: Option<RegistryBuilder>,
	sealed: bool,
	failure: Option<RegistryError>,
}

/// A registry that is written during bootstrap and read-only afterwards.
pub struct ProcessRegistry {
	options: RegistryOptions,
	pending: Mutex<Pending>,
	published: OnceLock<TypeRegistry>,
}

impl ProcessRegistry {
	/// Creates an open registry with default options.
	pub const fn new() -> Self {
		Self::with_options(RegistryOptions::DEFAULT)
	}

	/// Creates an open registry.
	pub const fn with_options(options: RegistryOptions) -> Self {
		Self {
			options,
			pending: parking_lot::const_mutex(Pending {
				builder: None,
				sealed: false,
				failure: None,
			}),
			published: OnceLock::new(),
		}
	}

	/// Returns true once the registry has been sealed.
	pub fn is_sealed(&self) -> bool {
		self.pending.lock().sealed
	}

	/// See [`RegistryBuilder::declare_slot`].
	pub fn declare_slot<S: Slot>(&self) -> Result<(), RegistryError> {
		self.with_pending(|b| {
			b.declare_slot::<S>();
			Ok(())
		})
	}

	/// See [`RegistryBuilder::register_type_of`].
	pub fn register_type_of<T>(&self, example: &T) -> Result<(), RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		self.with_pending(|b| b.register_type_of(example))
	}

	/// See [`RegistryBuilder::register_as`].
	pub fn register_as<T>(&self, id: impl Into<String>) -> Result<(), RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		self.with_pending(|b| b.register_as::<T>(id))
	}

	/// See [`RegistryBuilder::bind`].
	pub fn bind<S, T>(&self) -> Result<(), RegistryError>
	where
		S: Slot,
		T: SlotMember<S>,
	{
		self.with_pending(|b| b.bind::<S, T>())
	}

	/// Runs a whole bootstrap function against the pending builder.
	pub fn apply(&self, register: RegisterFn) -> Result<(), RegistryError> {
		self.with_pending(register)
	}

	/// Seals the registry on first call and returns it.
	///
	/// # Panics
	///
	/// Panics if bootstrap fails, e.g. on an identifier collision, including one
	/// already reported to the caller that registered it. Every later call panics
	/// with the same error. Startup must not continue with an inconsistent registry.
	pub fn seal(&self) -> TypeRegistry {
		self.published
			.get_or_init(|| {
				let label = self.options.label;
				match self.build() {
					Ok(registry) => {
						tracing::info!(registry = label, types = registry.len(), "type registry published");
						registry
					}
					Err(e) => {
						tracing::error!(registry = label, error = %e, "type registry bootstrap failed");
						panic!("type registry {label}: {e}");
					}
				}
			})
			.clone()
	}

	/// Returns the sealed registry, sealing it on first use.
	///
	/// # Panics
	///
	/// See [`ProcessRegistry::seal`].
	pub fn get(&self) -> TypeRegistry {
		self.seal()
	}

	fn build(&self) -> Result<TypeRegistry, RegistryError> {
		let builder = {
			let mut pending = self.pending.lock();
			if let Some(e) = &pending.failure {
				return Err(e.clone());
			}
			pending.sealed = true;
			pending.builder.take()
		};

		let mut builder = builder.unwrap_or_else(|| self.options.builder());
		let result = if self.options.collect_static {
			apply_static(&mut builder).and_then(|()| builder.seal())
		} else {
			builder.seal()
		};

		if let Err(e) = &result {
			self.pending.lock().failure = Some(e.clone());
		}
		result
	}

	fn with_pending<R>(
		&self,
		f: impl FnOnce(&mut RegistryBuilder) -> Result<R, RegistryError>,
	) -> Result<R, RegistryError> {
		let mut pending = self.pending.lock();
		if pending.sealed {
			tracing::warn!(registry = self.options.label, "registration after seal rejected");
			return Err(RegistryError::Sealed(self.options.label));
		}

		let builder = pending.builder.get_or_insert_with(|| self.options.builder());
		let result = f(builder);
		if let Err(e) = &result
			&& e.is_fatal()
			&& pending.failure.is_none()
		{
			tracing::error!(registry = self.options.label, error = %e, "bootstrap registration failed");
			pending.failure = Some(e.clone());
		}
		result
	}
}

impl Default for ProcessRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn apply_static(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
	apply_registrations(builder, inventory::iter::<Registration>)
}

fn apply_registrations<'a>(
	builder: &mut RegistryBuilder,
	entries: impl IntoIterator<Item = &'a Registration>,
) -> Result<(), RegistryError> {
	let mut entries: Vec<&Registration> = entries.into_iter().collect();
	entries.sort_by_key(|r| r.origin);

	for entry in entries {
		(entry.register)(builder)?;
		tracing::trace!(registry = builder.label(), origin = entry.origin, "applied static registration");
	}
	Ok(())
}

static GLOBAL: ProcessRegistry = ProcessRegistry::new();

/// The process-wide registry.
pub fn global() -> &'static ProcessRegistry {
	&GLOBAL
}

/// Declares a slot on the process-wide registry.
pub fn declare_slot<S: Slot>() -> Result<(), RegistryError> {
	GLOBAL.declare_slot::<S>()
}

/// Registers a type on the process-wide registry by example.
pub fn register_type_of<T>(example: &T) -> Result<(), RegistryError>
where
	T: Storable + Serialize + DeserializeOwned,
{
	GLOBAL.register_type_of(example)
}

/// Binds a slot member on the process-wide registry.
pub fn bind<S, T>() -> Result<(), RegistryError>
where
	S: Slot,
	T: SlotMember<S>,
{
	GLOBAL.bind::<S, T>()
}

/// Seals the process-wide registry.
pub fn seal() -> TypeRegistry {
	GLOBAL.seal()
}

/// Returns the sealed process-wide registry, sealing it on first use.
pub fn registry() -> TypeRegistry {
	GLOBAL.get()
}
