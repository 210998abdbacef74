use core::ops::{Add, Div, Mul, Sub};

/// The priority of a constraint.
///
/// A strength is a non-negative weight. Constraints at [`Strength::REQUIRED`] must be satisfied;
/// weaker ones are traded off against each other by weight. The named levels are three orders of
/// magnitude apart so that any number of weak violations cannot outweigh a medium one in
/// practice.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength(f64);

impl Strength {
	/// A constraint that must be satisfied.
	pub const REQUIRED: Self = Self(1_001_001_000.0);
	/// A strong preference.
	pub const STRONG: Self = Self(1_000_000.0);
	/// A medium preference.
	pub const MEDIUM: Self = Self(1_000.0);
	/// A weak preference.
	pub const WEAK: Self = Self(1.0);
	/// No preference at all.
	pub const ZERO: Self = Self(0.0);

	/// Creates a strength from a raw weight.
	pub const fn new(value: f64) -> Self {
		Self(value)
	}

	/// Creates a strength from strong, medium and weak components.
	///
	/// Each component is clamped to `[0, 1000]` and multiplied by `weight`.
	pub fn create(strong: f64, medium: f64, weak: f64, weight: f64) -> Self {
		let component = |value: f64| value.clamp(0.0, 1000.0) * weight;
		Self(component(strong) * 1_000_000.0 + component(medium) * 1_000.0 + component(weak))
	}

	/// The raw weight.
	pub const fn value(self) -> f64 {
		self.0
	}

	/// Multiplies the weight, usable in constant expressions.
	pub const fn mul_f64(self, rhs: f64) -> Self {
		Self(self.0 * rhs)
	}

	/// Divides the weight, usable in constant expressions.
	pub const fn div_f64(self, rhs: f64) -> Self {
		Self(self.0 / rhs)
	}

	/// Clamps the weight into `[0, REQUIRED]`.
	#[must_use = "method returns the modified value"]
	pub fn clip(self) -> Self {
		Self(self.0.clamp(0.0, Self::REQUIRED.0))
	}

	/// Returns true if a constraint with this strength must hold.
	pub const fn is_required(self) -> bool {
		self.0 >= Self::REQUIRED.0
	}
}

impl Add for Strength {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self(self.0 + rhs.0)
	}
}

impl Sub for Strength {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self(self.0 - rhs.0)
	}
}

impl Mul<f64> for Strength {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		self.mul_f64(rhs)
	}
}

impl Mul<Strength> for f64 {
	type Output = Strength;

	fn mul(self, rhs: Strength) -> Strength {
		rhs.mul_f64(self)
	}
}

impl Div<f64> for Strength {
	type Output = Self;

	fn div(self, rhs: f64) -> Self {
		self.div_f64(rhs)
	}
}
