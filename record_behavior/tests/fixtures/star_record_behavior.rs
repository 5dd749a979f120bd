// @generated by record-behavior 0.1.0
// Derived value semantics for `crate::Star`.
// Merge with `include!` from the module declaring the type.

#[automatically_derived]
impl ::core::default::Default for Star {
	fn default() -> Self {
		Self {
			a: ::core::default::Default::default(),
			b: ::core::default::Default::default(),
			c: ::core::default::Default::default(),
			d: ::core::default::Default::default(),
			e: ::core::default::Default::default(),
			f: ::core::default::Default::default(),
			g: ::core::default::Default::default(),
			h: ::core::default::Default::default(),
			i: ::core::default::Default::default(),
		}
	}
}

#[automatically_derived]
impl ::core::clone::Clone for Star {
	fn clone(&self) -> Self {
		Self {
			a: self.a.clone(),
			b: self.b.clone(),
			c: self.c.clone(),
			d: self.d.clone(),
			e: self.e.clone(),
			f: self.f.clone(),
			g: self.g.clone(),
			h: self.h.clone(),
			i: self.i.clone(),
		}
	}
}

#[automatically_derived]
impl Star {
	pub fn new(a: u64, b: u64, c: u64, d: u64, e: u64, f: u64, g: u64, h: u64, i: u64) -> Self {
		Self {
			a,
			b,
			c,
			d,
			e,
			f,
			g,
			h,
			i,
		}
	}
}

#[automatically_derived]
impl ::core::cmp::PartialEq for Star {
	fn eq(&self, other: &Self) -> bool {
		::core::ptr::eq(self, other) || (self.a == other.a && self.b == other.b && self.c == other.c && self.d == other.d && self.e == other.e && self.f == other.f && self.g == other.g && self.h == other.h && self.i == other.i)
	}
}

#[automatically_derived]
impl Star {
	pub fn dyn_eq(&self, other: &dyn ::core::any::Any) -> bool {
		other.downcast_ref::<Self>().is_some_and(|item| self == item)
	}
}

#[automatically_derived]
impl ::core::hash::Hash for Star {
	fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
		let group0 = crate::record_behavior::combine8(&self.a, &self.b, &self.c, &self.d, &self.e, &self.f, &self.g, &self.h);
		let group1 = crate::record_behavior::combine1(&self.i);
		state.write_u64(crate::record_behavior::combine2(&group0, &group1));
	}
}

#[automatically_derived]
impl ::core::fmt::Display for Star {
	fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
		let mut printed = ::std::string::String::new();
		let _ = crate::record_behavior::FieldPrint::print_fields(self, &mut printed);
		f.write_str("Star")?;
		f.write_str(" { ")?;
		f.write_str(&printed)?;
		f.write_str(" } ")
	}
}

#[automatically_derived]
impl crate::record_behavior::FieldPrint for Star {
	fn print_fields(&self, out: &mut ::std::string::String) -> bool {
		use ::core::fmt::Write as _;
		let _ = ::core::write!(out, "a = {}", self.a);
		let _ = ::core::write!(out, ", b = {}", self.b);
		let _ = ::core::write!(out, ", c = {}", self.c);
		let _ = ::core::write!(out, ", d = {}", self.d);
		let _ = ::core::write!(out, ", e = {}", self.e);
		let _ = ::core::write!(out, ", f = {}", self.f);
		let _ = ::core::write!(out, ", g = {}", self.g);
		let _ = ::core::write!(out, ", h = {}", self.h);
		let _ = ::core::write!(out, ", i = {}", self.i);
		true
	}
}

#[automatically_derived]
impl Star {
	pub fn deconstruct(self) -> (u64, u64, u64, u64, u64, u64, u64, u64, u64) {
		let Self { a, b, c, d, e, f, g, h, i } = self;
		(a, b, c, d, e, f, g, h, i)
	}
}
