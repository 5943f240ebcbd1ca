use log::debug;

use super::config::EditorConfig;
use super::edge::{Edge, Endpoint};
use super::geometry::{Point, Shape};
use super::input::{Modifiers, PointerButton};
use super::types::{EdgeId, JointId, Node, NodeId, ShapeStamp};

/// The single drag target of the gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	MovingNode {
		node: NodeId,
		offset: (f64, f64),
	},
	DrawingEdge {
		edge: EdgeId,
	},
	MovingJoint {
		edge: EdgeId,
		joint: JointId,
	},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	Node(NodeId),
	Joint { edge: EdgeId, joint: JointId },
	Edge(EdgeId),
}

pub struct EditorState {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
	pub config: EditorConfig,
	pub width: f64,
	pub height: f64,
	gesture: Gesture,
	stamp: ShapeStamp,
	next_id: u32,
	nodes_created: usize,
	redraw: bool,
}

impl EditorState {
	pub fn new(config: EditorConfig, stamp: ShapeStamp, width: f64, height: f64) -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			config,
			width,
			height,
			gesture: Gesture::Idle,
			stamp,
			next_id: 1,
			nodes_created: 0,
			redraw: true,
		}
	}

	pub fn gesture(&self) -> Gesture {
		self.gesture
	}

	pub fn shape_stamp(&self) -> ShapeStamp {
		self.stamp
	}

	/// Replaces the template used for nodes created from now on.
	pub fn set_shape_stamp(&mut self, stamp: ShapeStamp) {
		self.stamp = stamp;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.redraw = true;
	}

	/// Returns and clears the pending redraw request.
	pub fn take_redraw(&mut self) -> bool {
		std::mem::take(&mut self.redraw)
	}

	fn alloc_id(&mut self) -> u32 {
		let id = self.next_id;
		self.next_id += 1;
		id
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.iter().find(|e| e.id == id)
	}

	fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
		self.edges.iter_mut().find(|e| e.id == id)
	}

	/// Resolved source and destination centers of `edge`.
	pub fn endpoints(&self, edge: &Edge) -> Option<(Point, Point)> {
		let from = self.node(edge.source)?.shape.center;
		let to = match &edge.target {
			Endpoint::Node(id) => self.node(*id)?.shape.center,
			Endpoint::Placeholder(shape) => shape.center,
		};
		Some((from, to))
	}

	pub fn node_at(&self, p: Point) -> Option<NodeId> {
		self.nodes
			.iter()
			.rev()
			.find(|n| n.shape.contains(p))
			.map(|n| n.id)
	}

	pub fn joint_at(&self, p: Point) -> Option<(EdgeId, JointId)> {
		self.edges
			.iter()
			.find_map(|e| e.joint_point_at(p).map(|jp| (e.id, jp)))
	}

	pub fn edge_at(&self, p: Point) -> Option<EdgeId> {
		let (tolerance, metric) = (self.config.edge_tolerance, self.config.distance_metric);
		self.edges
			.iter()
			.find(|e| {
				self.endpoints(e)
					.is_some_and(|(from, to)| e.contains(from, to, p, tolerance, metric))
			})
			.map(|e| e.id)
	}

	/// Most specific thing under `p`: nodes, then joint points, then edges.
	pub fn hit_test(&self, p: Point) -> Option<Hit> {
		if let Some(node) = self.node_at(p) {
			return Some(Hit::Node(node));
		}
		if let Some((edge, joint)) = self.joint_at(p) {
			return Some(Hit::Joint { edge, joint });
		}
		self.edge_at(p).map(Hit::Edge)
	}

	pub fn create_node(&mut self, p: Point) -> NodeId {
		let id = NodeId(self.alloc_id());
		let color = self.config.color_for(self.nodes_created);
		self.nodes_created += 1;
		debug!("node {:?} created at ({}, {})", id, p.x, p.y);
		self.nodes.push(Node {
			id,
			shape: Shape::from_stamp(self.stamp, p),
			color,
		});
		self.redraw = true;
		id
	}

	/// Deletes the node and every edge attached to it.
	pub fn remove_node(&mut self, id: NodeId) -> bool {
		let Some(pos) = self.nodes.iter().position(|n| n.id == id) else {
			return false;
		};
		let attached: Vec<EdgeId> = self
			.edges
			.iter()
			.filter(|e| e.references(id))
			.map(|e| e.id)
			.collect();
		for edge in attached {
			self.remove_edge(edge);
		}
		self.nodes.remove(pos);
		if matches!(self.gesture, Gesture::MovingNode { node, .. } if node == id) {
			self.gesture = Gesture::Idle;
		}
		debug!("node {:?} removed", id);
		self.redraw = true;
		true
	}

	pub fn remove_edge(&mut self, id: EdgeId) -> bool {
		let before = self.edges.len();
		self.edges.retain(|e| e.id != id);
		if self.edges.len() == before {
			return false;
		}
		match self.gesture {
			Gesture::DrawingEdge { edge } | Gesture::MovingJoint { edge, .. } if edge == id => {
				self.gesture = Gesture::Idle;
			}
			_ => {}
		}
		debug!("edge {:?} removed", id);
		self.redraw = true;
		true
	}

	pub fn remove_joint_point(&mut self, edge: EdgeId, joint: JointId) -> bool {
		let removed = self
			.edge_mut(edge)
			.is_some_and(|e| e.remove_joint_point(joint));
		if !removed {
			return false;
		}
		if self.gesture == (Gesture::MovingJoint { edge, joint }) {
			self.gesture = Gesture::Idle;
		}
		debug!("joint {:?} removed from edge {:?}", joint, edge);
		self.redraw = true;
		true
	}

	fn start_edge(&mut self, source: NodeId) -> Option<EdgeId> {
		let center = self.node(source)?.shape.center;
		let id = EdgeId(self.alloc_id());
		let placeholder = Shape::from_stamp(
			ShapeStamp {
				width: 0.0,
				height: 0.0,
				..self.stamp
			},
			center,
		);
		self.edges
			.push(Edge::new(id, source, Endpoint::Placeholder(placeholder)));
		Some(id)
	}

	/// Resolves the placeholder destination of `id` at `p`: an existing
	/// node under the pointer, or a fresh node from the stamp.
	fn finish_edge(&mut self, id: EdgeId, p: Point) {
		let target = match self.node_at(p) {
			Some(node) => node,
			None => self.create_node(p),
		};
		if let Some(edge) = self.edge_mut(id) {
			edge.target = Endpoint::Node(target);
			debug!("edge {:?} connected {:?} -> {:?}", id, edge.source, target);
		}
	}

	pub fn press(&mut self, p: Point, button: PointerButton, mods: Modifiers) -> bool {
		if button != PointerButton::Primary {
			return false;
		}
		if self.gesture != Gesture::Idle {
			self.release(p);
		}

		let node = match self.node_at(p) {
			Some(node) => node,
			None => {
				if let Some((edge, joint)) = self.joint_at(p) {
					self.gesture = Gesture::MovingJoint { edge, joint };
					self.redraw = true;
					return true;
				}
				self.create_node(p)
			}
		};

		if self.config.edge_modifier.is_held(&mods) {
			if let Some(edge) = self.start_edge(node) {
				self.gesture = Gesture::DrawingEdge { edge };
			}
		} else if let Some(center) = self.node(node).map(|n| n.shape.center) {
			self.gesture = Gesture::MovingNode {
				node,
				offset: p.offset_from(center),
			};
		}
		self.redraw = true;
		true
	}

	pub fn drag(&mut self, p: Point) -> bool {
		match self.gesture {
			Gesture::Idle => false,
			Gesture::MovingNode { node, offset } => {
				let Some(n) = self.node_mut(node) else {
					return false;
				};
				n.shape.move_to(p.translate(-offset.0, -offset.1));
				self.redraw = true;
				true
			}
			Gesture::DrawingEdge { edge } => {
				let Some(Edge {
					target: Endpoint::Placeholder(shape),
					..
				}) = self.edge_mut(edge)
				else {
					return false;
				};
				shape.move_to(p);
				self.redraw = true;
				true
			}
			Gesture::MovingJoint { edge, joint } => {
				let Some(jp) = self.edge_mut(edge).and_then(|e| e.joint_point_mut(joint)) else {
					return false;
				};
				jp.shape.move_to(p);
				self.redraw = true;
				true
			}
		}
	}

	pub fn release(&mut self, p: Point) -> bool {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => return false,
			Gesture::DrawingEdge { edge } => self.finish_edge(edge, p),
			Gesture::MovingNode { .. } | Gesture::MovingJoint { .. } => {}
		}
		self.redraw = true;
		true
	}

	/// Adds a joint point at the current destination of the edge being
	/// drawn when `key` is the configured joint key.
	pub fn key_down(&mut self, key: &str) -> bool {
		let Gesture::DrawingEdge { edge } = self.gesture else {
			return false;
		};
		if key != self.config.joint_key {
			return false;
		}
		let Some((_, at)) = self.edge(edge).and_then(|e| self.endpoints(e)) else {
			return false;
		};
		let (id, size) = (JointId(self.alloc_id()), self.config.joint_size);
		if let Some(e) = self.edge_mut(edge) {
			e.add_joint_point(id, at, size);
			debug!("joint {:?} added to edge {:?} at ({}, {})", id, edge, at.x, at.y);
		}
		self.redraw = true;
		true
	}

	/// Deletes whatever `hit_test` finds under `p`. Ignored mid-gesture.
	pub fn secondary_click(&mut self, p: Point) -> bool {
		if self.gesture != Gesture::Idle {
			return false;
		}
		match self.hit_test(p) {
			Some(Hit::Node(node)) => self.remove_node(node),
			Some(Hit::Joint { edge, joint }) => self.remove_joint_point(edge, joint),
			Some(Hit::Edge(edge)) => self.remove_edge(edge),
			None => false,
		}
	}
}
