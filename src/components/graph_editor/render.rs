use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{Point, Shape};
use super::state::EditorState;
use super::types::ShapeKind;

const EDGE_WIDTH: f64 = 1.5;
const DRAFT_DASH: (f64, f64) = (6.0, 4.0);

/// The drawing operations the editor needs from a 2D backend.
pub trait Surface {
	fn save(&self);
	fn restore(&self);
	/// Resets the whole area to transparent.
	fn clear(&self, width: f64, height: f64);
	fn fill_background(&self, color: &str, width: f64, height: f64);
	fn set_fill(&self, color: &str);
	fn set_stroke(&self, color: &str, line_width: f64);
	/// `None` switches back to solid lines.
	fn set_dash(&self, dash: Option<(f64, f64)>);
	fn stroke_segment(&self, from: Point, to: Point);
	fn fill_shape(&self, shape: &Shape);
}

impl Surface for CanvasRenderingContext2d {
	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_background(&self, color: &str, width: f64, height: f64) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn set_fill(&self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke(&self, color: &str, line_width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
	}

	fn set_dash(&self, dash: Option<(f64, f64)>) {
		let pattern = match dash {
			Some((on, off)) => js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)),
			None => js_sys::Array::new(),
		};
		let _ = self.set_line_dash(&pattern);
	}

	fn stroke_segment(&self, from: Point, to: Point) {
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn fill_shape(&self, shape: &Shape) {
		match shape.kind {
			ShapeKind::Oval => {
				self.begin_path();
				let _ = self.ellipse(
					shape.center.x,
					shape.center.y,
					shape.width / 2.0,
					shape.height / 2.0,
					0.0,
					0.0,
					2.0 * PI,
				);
				self.fill();
			}
			ShapeKind::Rect => {
				let origin = shape.top_left();
				self.fill_rect(origin.x, origin.y, shape.width, shape.height);
			}
		}
	}
}

pub fn render<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	if state.config.opaque {
		surface.fill_background(&state.config.background, state.width, state.height);
	} else {
		surface.clear(state.width, state.height);
	}
	draw_nodes(state, surface);
	draw_edges(state, surface);
}

fn draw_nodes<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	for node in &state.nodes {
		surface.set_fill(&node.color);
		surface.fill_shape(&node.shape);
	}
}

fn draw_edges<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	surface.set_stroke(&state.config.foreground, EDGE_WIDTH);

	for edge in &state.edges {
		let Some((from, to)) = state.endpoints(edge) else {
			continue;
		};
		// only the edge being drawn ends on a placeholder
		let draft = !edge.is_complete();
		if draft {
			surface.set_dash(Some(DRAFT_DASH));
		}
		edge.draw(from, to, surface, &state.config.joint_color);
		if draft {
			surface.set_dash(None);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::graph_editor::config::EditorConfig;
	use crate::components::graph_editor::input::{Modifiers, PointerButton};
	use crate::components::graph_editor::types::ShapeStamp;

	#[derive(Clone, Debug, PartialEq)]
	enum Op {
		Clear,
		Background(String),
		Fill(String),
		Stroke(String),
		Dash(Option<(f64, f64)>),
		Segment(Point, Point),
		Shape(Point),
		Save,
		Restore,
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Recorder {
		fn ops(&self) -> Vec<Op> {
			self.0.borrow().clone()
		}

		fn position(&self, pred: impl Fn(&Op) -> bool) -> Option<usize> {
			self.0.borrow().iter().position(pred)
		}
	}

	impl Surface for Recorder {
		fn save(&self) {
			self.0.borrow_mut().push(Op::Save);
		}
		fn restore(&self) {
			self.0.borrow_mut().push(Op::Restore);
		}
		fn clear(&self, _width: f64, _height: f64) {
			self.0.borrow_mut().push(Op::Clear);
		}
		fn fill_background(&self, color: &str, _width: f64, _height: f64) {
			self.0.borrow_mut().push(Op::Background(color.into()));
		}
		fn set_fill(&self, color: &str) {
			self.0.borrow_mut().push(Op::Fill(color.into()));
		}
		fn set_stroke(&self, color: &str, _line_width: f64) {
			self.0.borrow_mut().push(Op::Stroke(color.into()));
		}
		fn set_dash(&self, dash: Option<(f64, f64)>) {
			self.0.borrow_mut().push(Op::Dash(dash));
		}
		fn stroke_segment(&self, from: Point, to: Point) {
			self.0.borrow_mut().push(Op::Segment(from, to));
		}
		fn fill_shape(&self, shape: &Shape) {
			self.0.borrow_mut().push(Op::Shape(shape.center));
		}
	}

	const ALT: Modifiers = Modifiers {
		alt: true,
		..Modifiers::NONE
	};

	fn editor(opaque: bool) -> EditorState {
		let config = EditorConfig {
			opaque,
			..EditorConfig::default()
		};
		EditorState::new(config, ShapeStamp::default(), 400.0, 300.0)
	}

	fn click(s: &mut EditorState, p: Point) {
		s.press(p, PointerButton::Primary, Modifiers::NONE);
		s.release(p);
	}

	fn connect(s: &mut EditorState, from: Point, to: Point) {
		s.press(from, PointerButton::Primary, ALT);
		s.drag(to);
		s.release(to);
	}

	#[test]
	fn opaque_scene_fills_the_background() {
		let s = editor(true);
		let rec = Recorder::default();
		render(&s, &rec);
		assert_eq!(rec.ops()[0], Op::Background(s.config.background.clone()));
		assert!(!rec.ops().contains(&Op::Clear));
	}

	#[test]
	fn transparent_scene_only_clears() {
		let s = editor(false);
		let rec = Recorder::default();
		render(&s, &rec);
		assert_eq!(rec.ops()[0], Op::Clear);
		assert!(!rec.ops().iter().any(|op| matches!(op, Op::Background(_))));
	}

	#[test]
	fn nodes_are_filled_in_insertion_order_with_their_colors() {
		let mut s = editor(true);
		let points = [Point::new(10.0, 10.0), Point::new(60.0, 10.0), Point::new(110.0, 10.0)];
		for p in points {
			click(&mut s, p);
		}
		let rec = Recorder::default();
		render(&s, &rec);

		let expected: Vec<Op> = s
			.nodes
			.iter()
			.flat_map(|n| [Op::Fill(n.color.clone()), Op::Shape(n.shape.center)])
			.collect();
		assert_eq!(rec.ops()[1..=expected.len()], expected[..]);
		assert_eq!(
			s.nodes.iter().map(|n| n.shape.center).collect::<Vec<_>>(),
			points
		);
	}

	#[test]
	fn edges_are_stroked_after_every_node() {
		let mut s = editor(true);
		click(&mut s, Point::new(10.0, 10.0));
		connect(&mut s, Point::new(10.0, 10.0), Point::new(90.0, 10.0));
		click(&mut s, Point::new(50.0, 80.0));

		let rec = Recorder::default();
		render(&s, &rec);
		let last_node = rec
			.position(|op| *op == Op::Shape(Point::new(50.0, 80.0)))
			.expect("last node filled");
		let stroke = rec
			.position(|op| *op == Op::Stroke(s.config.foreground.clone()))
			.expect("foreground stroke set");
		let segment = rec
			.position(|op| matches!(op, Op::Segment(..)))
			.expect("edge stroked");
		assert!(last_node < stroke);
		assert!(stroke < segment);
		assert!(!rec.ops().iter().any(|op| matches!(op, Op::Dash(_))));
	}

	#[test]
	fn only_the_draft_edge_is_dashed() {
		let mut s = editor(true);
		click(&mut s, Point::new(10.0, 10.0));
		connect(&mut s, Point::new(10.0, 10.0), Point::new(90.0, 10.0));
		s.press(Point::new(90.0, 10.0), PointerButton::Primary, ALT);
		s.drag(Point::new(90.0, 90.0));

		let rec = Recorder::default();
		render(&s, &rec);
		let draft = Op::Segment(Point::new(90.0, 10.0), Point::new(90.0, 90.0));
		let complete = Op::Segment(Point::new(10.0, 10.0), Point::new(90.0, 10.0));
		let tail: Vec<Op> = rec
			.ops()
			.into_iter()
			.filter(|op| matches!(op, Op::Segment(..) | Op::Dash(_)))
			.collect();
		assert_eq!(
			tail,
			vec![complete, Op::Dash(Some(DRAFT_DASH)), draft, Op::Dash(None)]
		);
	}
}
