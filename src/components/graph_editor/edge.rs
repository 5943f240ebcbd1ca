use super::geometry::{DistanceMetric, Point, Shape};
use super::render::Surface;
use super::types::{EdgeId, JointId, NodeId};

#[derive(Clone, Debug, PartialEq)]
pub struct JointPoint {
	pub id: JointId,
	pub shape: Shape,
}

/// Destination of an edge. `Placeholder` only exists while the edge is
/// being drawn and is not part of the scene's node list.
#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint {
	Node(NodeId),
	Placeholder(Shape),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub source: NodeId,
	pub target: Endpoint,
	pub joints: Vec<JointPoint>,
}

impl Edge {
	pub fn new(id: EdgeId, source: NodeId, target: Endpoint) -> Self {
		Self {
			id,
			source,
			target,
			joints: Vec::new(),
		}
	}

	pub fn is_complete(&self) -> bool {
		matches!(self.target, Endpoint::Node(_))
	}

	pub fn references(&self, node: NodeId) -> bool {
		self.source == node || self.target == Endpoint::Node(node)
	}

	/// Appends a joint point centered on `at`, normally the current
	/// destination center.
	pub fn add_joint_point(&mut self, id: JointId, at: Point, size: f64) {
		self.joints.push(JointPoint {
			id,
			shape: Shape::oval(at, size, size),
		});
	}

	pub fn remove_joint_point(&mut self, id: JointId) -> bool {
		let before = self.joints.len();
		self.joints.retain(|jp| jp.id != id);
		self.joints.len() != before
	}

	pub fn joint_point_at(&self, p: Point) -> Option<JointId> {
		self.joints
			.iter()
			.find(|jp| jp.shape.contains(p))
			.map(|jp| jp.id)
	}

	pub fn joint_point_mut(&mut self, id: JointId) -> Option<&mut JointPoint> {
		self.joints.iter_mut().find(|jp| jp.id == id)
	}

	/// Polyline vertices: `from`, every joint center, then `to`.
	pub fn path(&self, from: Point, to: Point) -> Vec<Point> {
		let mut points = Vec::with_capacity(self.joints.len() + 2);
		points.push(from);
		points.extend(self.joints.iter().map(|jp| jp.shape.center));
		points.push(to);
		points
	}

	pub fn contains(
		&self,
		from: Point,
		to: Point,
		p: Point,
		tolerance: f64,
		metric: DistanceMetric,
	) -> bool {
		self.path(from, to)
			.windows(2)
			.any(|seg| metric.distance(p, seg[0], seg[1]) < tolerance)
	}

	/// Strokes the polyline with the surface's current stroke style, then
	/// fills the joint markers in `joint_color` without leaking the fill
	/// style to later drawing.
	pub fn draw<S: Surface + ?Sized>(&self, from: Point, to: Point, surface: &S, joint_color: &str) {
		for seg in self.path(from, to).windows(2) {
			surface.stroke_segment(seg[0], seg[1]);
		}
		if self.joints.is_empty() {
			return;
		}
		surface.save();
		surface.set_fill(joint_color);
		for jp in &self.joints {
			surface.fill_shape(&jp.shape);
		}
		surface.restore();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Stroke(Point, Point),
		Save,
		Fill(String),
		Shape(Point),
		Restore,
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Surface for Recorder {
		fn save(&self) {
			self.0.borrow_mut().push(Op::Save);
		}
		fn restore(&self) {
			self.0.borrow_mut().push(Op::Restore);
		}
		fn clear(&self, _width: f64, _height: f64) {}
		fn fill_background(&self, _color: &str, _width: f64, _height: f64) {}
		fn set_fill(&self, color: &str) {
			self.0.borrow_mut().push(Op::Fill(color.to_string()));
		}
		fn set_stroke(&self, _color: &str, _line_width: f64) {}
		fn set_dash(&self, _dash: Option<(f64, f64)>) {}
		fn stroke_segment(&self, from: Point, to: Point) {
			self.0.borrow_mut().push(Op::Stroke(from, to));
		}
		fn fill_shape(&self, shape: &Shape) {
			self.0.borrow_mut().push(Op::Shape(shape.center));
		}
	}

	const A: Point = Point::new(0.0, 0.0);
	const B: Point = Point::new(100.0, 0.0);

	fn edge() -> Edge {
		Edge::new(EdgeId(1), NodeId(1), Endpoint::Node(NodeId(2)))
	}

	#[test]
	fn straight_edge_is_a_single_segment() {
		let e = edge();
		assert_eq!(e.path(A, B), vec![A, B]);
		assert!(e.contains(A, B, Point::new(50.0, 1.5), 2.0, DistanceMetric::Segment));
		assert!(!e.contains(A, B, Point::new(50.0, 2.0), 2.0, DistanceMetric::Segment));
		assert!(!e.contains(A, B, Point::new(50.0, 30.0), 2.0, DistanceMetric::Line));
	}

	#[test]
	fn joints_bend_the_path() {
		let mut e = edge();
		e.add_joint_point(JointId(7), Point::new(50.0, 50.0), 10.0);
		let mid_first_leg = Point::new(25.0, 25.0);
		assert!(e.contains(A, B, mid_first_leg, 2.0, DistanceMetric::Segment));
		assert!(!e.contains(A, B, Point::new(50.0, 0.0), 2.0, DistanceMetric::Segment));
	}

	#[test]
	fn add_then_remove_restores_the_path() {
		let mut e = edge();
		e.add_joint_point(JointId(3), Point::new(10.0, 10.0), 10.0);
		let before = e.path(A, B);
		e.add_joint_point(JointId(4), Point::new(40.0, -20.0), 10.0);
		assert_eq!(e.path(A, B).len(), 4);
		assert!(e.remove_joint_point(JointId(4)));
		assert_eq!(e.path(A, B), before);
		assert!(!e.remove_joint_point(JointId(4)));
	}

	#[test]
	fn joint_lookup_returns_first_in_insertion_order() {
		let mut e = edge();
		e.add_joint_point(JointId(1), Point::new(30.0, 30.0), 10.0);
		e.add_joint_point(JointId(2), Point::new(32.0, 30.0), 10.0);
		assert_eq!(e.joint_point_at(Point::new(31.0, 30.0)), Some(JointId(1)));
		assert_eq!(e.joint_point_at(Point::new(36.0, 30.0)), Some(JointId(2)));
		assert_eq!(e.joint_point_at(Point::new(60.0, 60.0)), None);
	}

	#[test]
	fn references_checks_both_ends() {
		let e = edge();
		assert!(e.references(NodeId(1)));
		assert!(e.references(NodeId(2)));
		assert!(!e.references(NodeId(3)));
		let drawing = Edge::new(
			EdgeId(2),
			NodeId(1),
			Endpoint::Placeholder(Shape::oval(A, 0.0, 0.0)),
		);
		assert!(!drawing.is_complete());
		assert!(!drawing.references(NodeId(2)));
	}

	#[test]
	fn draw_strokes_segments_then_fills_joints() {
		let mut e = edge();
		let j = Point::new(50.0, 50.0);
		e.add_joint_point(JointId(1), j, 10.0);
		let rec = Recorder::default();
		e.draw(A, B, &rec, "red");
		assert_eq!(
			rec.0.into_inner(),
			vec![
				Op::Stroke(A, j),
				Op::Stroke(j, B),
				Op::Save,
				Op::Fill("red".into()),
				Op::Shape(j),
				Op::Restore,
			]
		);
	}

	#[test]
	fn draw_without_joints_leaves_paint_alone() {
		let rec = Recorder::default();
		edge().draw(A, B, &rec, "red");
		assert_eq!(rec.0.into_inner(), vec![Op::Stroke(A, B)]);
	}
}
