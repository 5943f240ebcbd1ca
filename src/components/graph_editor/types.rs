use super::geometry::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeKind {
	#[default]
	Oval,
	Rect,
}

/// Template for the geometry of newly created nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStamp {
	pub kind: ShapeKind,
	pub width: f64,
	pub height: f64,
}

impl ShapeStamp {
	pub const fn oval(width: f64, height: f64) -> Self {
		Self {
			kind: ShapeKind::Oval,
			width,
			height,
		}
	}

	pub const fn rect(width: f64, height: f64) -> Self {
		Self {
			kind: ShapeKind::Rect,
			width,
			height,
		}
	}
}

impl Default for ShapeStamp {
	fn default() -> Self {
		Self::oval(10.0, 10.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub shape: Shape,
	pub color: String,
}
