// @generated by record-behavior 0.1.0
// Derived value semantics for `crate::Sensor`.
// Merge with `include!` from the module declaring the type.

#[automatically_derived]
impl ::core::default::Default for Sensor {
	fn default() -> Self {
		Self {
			glitch: ::core::default::Default::default(),
		}
	}
}

#[automatically_derived]
impl ::core::clone::Clone for Sensor {
	fn clone(&self) -> Self {
		Self {
			glitch: self.glitch.clone(),
		}
	}
}

#[automatically_derived]
impl Sensor {
	pub fn new(glitch: Glitch) -> Self {
		Self {
			glitch,
		}
	}
}

#[automatically_derived]
impl ::core::cmp::PartialEq for Sensor {
	fn eq(&self, other: &Self) -> bool {
		::core::ptr::eq(self, other) || (self.glitch == other.glitch)
	}
}

#[automatically_derived]
impl Sensor {
	pub fn dyn_eq(&self, other: &dyn ::core::any::Any) -> bool {
		other.downcast_ref::<Self>().is_some_and(|item| self == item)
	}
}

#[automatically_derived]
impl ::core::hash::Hash for Sensor {
	fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
		let group0 = crate::record_behavior::combine1(&self.glitch);
		state.write_u64(group0);
	}
}

#[automatically_derived]
impl ::core::fmt::Display for Sensor {
	fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
		let mut printed = ::std::string::String::new();
		let _ = crate::record_behavior::FieldPrint::print_fields(self, &mut printed);
		f.write_str("Sensor")?;
		f.write_str(" { ")?;
		f.write_str(&printed)?;
		f.write_str(" } ")
	}
}

#[automatically_derived]
impl crate::record_behavior::FieldPrint for Sensor {
	fn print_fields(&self, out: &mut ::std::string::String) -> bool {
		use ::core::fmt::Write as _;
		let _ = ::core::write!(out, "glitch = {}", self.glitch);
		true
	}
}

#[automatically_derived]
impl Sensor {
	pub fn deconstruct(self) -> (Glitch,) {
		let Self { glitch } = self;
		(glitch,)
	}
}
