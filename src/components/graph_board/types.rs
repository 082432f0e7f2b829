/// A 2D coordinate in unscaled board space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A snippet placed on the board. `text` never changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct SnippetNode {
	pub id: String,
	pub text: String,
	pub position: Point,
}

/// An undirected connection between two snippet ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub a: String,
	pub b: String,
}

impl Connection {
	/// True if this connection links `x` and `y`, in either orientation.
	pub fn joins(&self, x: &str, y: &str) -> bool {
		(self.a == x && self.b == y) || (self.a == y && self.b == x)
	}

	/// True if either endpoint is `id`.
	pub fn touches(&self, id: &str) -> bool {
		self.a == id || self.b == id
	}
}
