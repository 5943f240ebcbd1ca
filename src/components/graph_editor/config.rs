use super::geometry::DistanceMetric;
use super::input::Modifier;

pub const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Maximum distance from a polyline segment that still counts as a hit
	/// on the edge.
	pub edge_tolerance: f64,
	pub joint_size: f64,
	pub distance_metric: DistanceMetric,
	/// Held on press to draw an edge instead of moving a node.
	pub edge_modifier: Modifier,
	/// `KeyboardEvent.key` value that adds a joint point while drawing.
	pub joint_key: String,
	pub opaque: bool,
	pub background: String,
	pub foreground: String,
	pub joint_color: String,
	pub palette: Vec<String>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			edge_tolerance: 2.0,
			joint_size: 10.0,
			distance_metric: DistanceMetric::default(),
			edge_modifier: Modifier::Alt,
			joint_key: " ".into(),
			opaque: true,
			background: "#1a1a2e".into(),
			foreground: "rgba(100, 180, 255, 0.9)".into(),
			joint_color: "#d62728".into(),
			palette: COLORS.iter().map(|c| c.to_string()).collect(),
		}
	}
}

impl EditorConfig {
	/// Palette entry for the `n`th node created in a scene.
	pub fn color_for(&self, n: usize) -> String {
		if self.palette.is_empty() {
			return self.foreground.clone();
		}
		self.palette[n % self.palette.len()].clone()
	}
}
