//! Shapes used across registry tests.

pub(crate) trait Shape: Send {
	fn sides(&self) -> u32;

	/// Increments and returns per-instance state.
	fn bump(&mut self) -> u32 {
		0
	}
}

#[derive(Default)]
pub(crate) struct Triangle;

impl Shape for Triangle {
	fn sides(&self) -> u32 {
		3
	}
}

#[derive(Default)]
pub(crate) struct Square;

impl Shape for Square {
	fn sides(&self) -> u32 {
		4
	}
}

/// Shape with mutable state, to tell instances apart.
#[derive(Default)]
pub(crate) struct Counter {
	hits: u32,
}

impl Shape for Counter {
	fn sides(&self) -> u32 {
		0
	}

	fn bump(&mut self) -> u32 {
		self.hits += 1;
		self.hits
	}
}

pub(crate) fn triangle() -> Box<dyn Shape> {
	Box::new(Triangle)
}

pub(crate) fn square() -> Box<dyn Shape> {
	Box::new(Square)
}

pub(crate) fn counter() -> Box<dyn Shape> {
	Box::new(Counter::default())
}
