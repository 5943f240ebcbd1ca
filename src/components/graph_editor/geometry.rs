use super::types::{ShapeKind, ShapeStamp};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Vector from `origin` to `self`.
	pub fn offset_from(self, origin: Point) -> (f64, f64) {
		(self.x - origin.x, self.y - origin.y)
	}

	pub fn translate(self, dx: f64, dy: f64) -> Point {
		Point::new(self.x + dx, self.y + dy)
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = self.offset_from(other);
		(dx * dx + dy * dy).sqrt()
	}
}

/// An axis-aligned oval or rectangle described by its center and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
	pub kind: ShapeKind,
	pub center: Point,
	pub width: f64,
	pub height: f64,
}

impl Shape {
	pub fn from_stamp(stamp: ShapeStamp, center: Point) -> Self {
		Self {
			kind: stamp.kind,
			center,
			width: stamp.width,
			height: stamp.height,
		}
	}

	pub fn oval(center: Point, width: f64, height: f64) -> Self {
		Self {
			kind: ShapeKind::Oval,
			center,
			width,
			height,
		}
	}

	pub fn top_left(&self) -> Point {
		self.center.translate(-self.width / 2.0, -self.height / 2.0)
	}

	pub fn move_to(&mut self, center: Point) {
		self.center = center;
	}

	pub fn contains(&self, p: Point) -> bool {
		if self.width <= 0.0 || self.height <= 0.0 {
			return false;
		}
		match self.kind {
			ShapeKind::Oval => {
				let nx = (p.x - self.center.x) / (self.width / 2.0);
				let ny = (p.y - self.center.y) / (self.height / 2.0);
				nx * nx + ny * ny < 1.0
			}
			ShapeKind::Rect => {
				let origin = self.top_left();
				p.x >= origin.x
					&& p.x < origin.x + self.width
					&& p.y >= origin.y
					&& p.y < origin.y + self.height
			}
		}
	}
}

/// How the distance between a point and one polyline segment is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
	/// Distance to the infinite line through both endpoints. Collinear
	/// points past either end of a segment count as on it. A zero-length
	/// segment defines no line and is infinitely far from every point.
	Line,
	/// Distance to the closed segment. A zero-length segment measures to
	/// its single point.
	#[default]
	Segment,
}

impl DistanceMetric {
	pub fn distance(self, p: Point, a: Point, b: Point) -> f64 {
		let (vx, vy) = b.offset_from(a);
		let len_sq = vx * vx + vy * vy;
		if len_sq == 0.0 {
			return match self {
				DistanceMetric::Line => f64::INFINITY,
				DistanceMetric::Segment => p.distance(a),
			};
		}
		let (wx, wy) = p.offset_from(a);
		match self {
			DistanceMetric::Line => (vx * wy - vy * wx).abs() / len_sq.sqrt(),
			DistanceMetric::Segment => {
				let t = ((wx * vx + wy * vy) / len_sq).clamp(0.0, 1.0);
				p.distance(a.translate(t * vx, t * vy))
			}
		}
	}
}
