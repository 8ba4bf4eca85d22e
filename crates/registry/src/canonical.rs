//! Stable identifiers derived from Rust type names.
//!
//! A stable identifier must survive refactors that move a type between modules
//! of the same crate, so every path is reduced to its first and last segment:
//! `mortar_ast::nodes::statements::IfStatement` becomes `mortar_ast::IfStatement`.
//! Generic arguments are reduced the same way. Two types in one crate sharing a
//! name therefore collide, which registration reports as a bootstrap failure.
//!
//! `type_name` output may change between compiler releases. Types listed in a
//! [`slot_table!`](crate::slot_table) are registered under identifiers built from
//! their source names instead; [`stable_id`] covers types registered directly.

use std::any::type_name;

/// Returns the stable identifier for `T`.
pub fn stable_id<T: ?Sized>() -> String {
	canonicalize(type_name::<T>())
}

/// Canonicalizes a Rust type name.
pub fn canonicalize(type_name: &str) -> String {
	let mut out = String::with_capacity(type_name.len());
	let mut path = String::new();

	for ch in type_name.chars() {
		if ch.is_alphanumeric() || ch == '_' || ch == ':' {
			path.push(ch);
		} else {
			flush_path(&mut out, &mut path);
			out.push(ch);
		}
	}
	flush_path(&mut out, &mut path);

	out
}

fn flush_path(out: &mut String, path: &mut String) {
	if path.is_empty() {
		return;
	}

	let mut segments = path.split("::").filter(|s| !s.is_empty());
	if let Some(first) = segments.next() {
		out.push_str(first);
		if let Some(last) = segments.last() {
			out.push_str("::");
			out.push_str(last);
		}
	}
	path.clear();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_intermediate_modules() {
		assert_eq!(canonicalize("mortar_ast::nodes::statements::IfStatement"), "mortar_ast::IfStatement");
		assert_eq!(canonicalize("mortar_ast::Program"), "mortar_ast::Program");
	}

	#[test]
	fn leaves_primitives_alone() {
		assert_eq!(canonicalize("u32"), "u32");
		assert_eq!(canonicalize("&str"), "&str");
	}

	#[test]
	fn canonicalizes_generic_arguments() {
		assert_eq!(
			canonicalize("alloc::vec::Vec<mortar_ast::nodes::Identifier>"),
			"alloc::Vec<mortar_ast::Identifier>"
		);
		assert_eq!(
			canonicalize("core::option::Option<(alloc::string::String, u8)>"),
			"core::Option<(alloc::String, u8)>"
		);
	}

	#[test]
	fn stable_id_uses_type_name() {
		struct Local;
		assert_eq!(stable_id::<Local>(), "mortar_registry::Local");
	}
}
