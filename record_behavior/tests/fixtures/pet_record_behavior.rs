// @generated by record-behavior 0.1.0
// Derived value semantics for `crate::Pet`.
// Merge with `include!` from the module declaring the type.

#[automatically_derived]
impl ::core::default::Default for Pet {
	fn default() -> Self {
		Self {
			name: ::core::default::Default::default(),
		}
	}
}

#[automatically_derived]
impl ::core::clone::Clone for Pet {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
		}
	}
}

#[automatically_derived]
impl Pet {
	pub fn new(name: String) -> Self {
		Self {
			name,
		}
	}
}

#[automatically_derived]
impl ::core::cmp::PartialEq for Pet {
	fn eq(&self, other: &Self) -> bool {
		::core::ptr::eq(self, other) || (self.name == other.name)
	}
}

#[automatically_derived]
impl Pet {
	pub fn dyn_eq(&self, other: &dyn ::core::any::Any) -> bool {
		other.downcast_ref::<Self>().is_some_and(|item| self == item)
	}
}

#[automatically_derived]
impl ::core::hash::Hash for Pet {
	fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
		let group0 = crate::record_behavior::combine1(&self.name);
		state.write_u64(group0);
	}
}

#[automatically_derived]
impl ::core::fmt::Display for Pet {
	fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
		let mut printed = ::std::string::String::new();
		let _ = crate::record_behavior::FieldPrint::print_fields(self, &mut printed);
		f.write_str("Pet")?;
		f.write_str(" { ")?;
		f.write_str(&printed)?;
		f.write_str(" } ")
	}
}

#[automatically_derived]
impl crate::record_behavior::FieldPrint for Pet {
	fn print_fields(&self, out: &mut ::std::string::String) -> bool {
		use ::core::fmt::Write as _;
		let _ = ::core::write!(out, "name = {}", self.name);
		true
	}
}

#[automatically_derived]
impl Pet {
	pub fn deconstruct(self) -> (String,) {
		let Self { name } = self;
		(name,)
	}
}
