use uuid::Uuid;

use super::types::{Connection, Point, SnippetNode};

/// Where newly added snippets land. Repeated adds stack here until the
/// user drags them apart.
pub const DEFAULT_SPAWN: Point = Point { x: 50.0, y: 50.0 };

/// Offset from a node's top-left corner to where connection lines attach,
/// roughly the center of the fixed-width panel.
pub const NODE_ANCHOR: Point = Point { x: 132.0, y: 25.0 };

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.1;

/// What the pointer is currently doing. Dragging and connecting are
/// mutually exclusive by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PointerMode {
	#[default]
	Idle,
	Dragging { id: String, offset: Point },
	Connecting { source: String },
}

/// Everything the board owns: placed snippets, the connections between
/// them, and the transient interaction state. Positions and the tracked
/// pointer are in unscaled board space; raw pointer coordinates are divided
/// by `zoom` before they get here.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
	pub nodes: Vec<SnippetNode>,
	pub connections: Vec<Connection>,
	pub mode: PointerMode,
	pub pointer: Point,
	pub zoom: f64,
}

impl Default for BoardState {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			connections: Vec::new(),
			mode: PointerMode::Idle,
			pointer: Point::default(),
			zoom: 1.0,
		}
	}
}

impl BoardState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Convert a pointer coordinate relative to the board surface into
	/// unscaled board space.
	pub fn to_board(&self, x: f64, y: f64) -> Point {
		Point::new(x / self.zoom, y / self.zoom)
	}

	pub fn node(&self, id: &str) -> Option<&SnippetNode> {
		self.nodes.iter().find(|node| node.id == id)
	}

	fn node_mut(&mut self, id: &str) -> Option<&mut SnippetNode> {
		self.nodes.iter_mut().find(|node| node.id == id)
	}

	/// Place a new snippet at the default spawn position, returning its id.
	pub fn add_snippet(&mut self, text: &str) -> String {
		let id = Uuid::new_v4().to_string();
		self.nodes.push(SnippetNode {
			id: id.clone(),
			text: text.to_owned(),
			position: DEFAULT_SPAWN,
		});
		id
	}

	/// Grab `id` for dragging. Ignored while connect mode is armed.
	pub fn begin_drag(&mut self, id: &str, pointer: Point) {
		if self.mode != PointerMode::Idle {
			return;
		}
		let Some(node) = self.node(id) else { return };
		self.mode = PointerMode::Dragging {
			id: id.to_owned(),
			offset: Point::new(
				pointer.x - node.position.x,
				pointer.y - node.position.y,
			),
		};
	}

	/// Track the pointer; while dragging, the grabbed node follows it with
	/// the offset captured at grab time.
	pub fn pointer_moved(&mut self, pointer: Point) {
		self.pointer = pointer;
		if let PointerMode::Dragging { id, offset } = self.mode.clone() {
			if let Some(node) = self.node_mut(&id) {
				node.position = Point::new(pointer.x - offset.x, pointer.y - offset.y);
			}
		}
	}

	/// Release the current drag, if any. Connect mode survives mouseup.
	pub fn end_drag(&mut self) {
		if matches!(self.mode, PointerMode::Dragging { .. }) {
			self.mode = PointerMode::Idle;
		}
	}

	/// Arm `id` as the connection source, disarm if it already was the
	/// source, or switch over from any previously armed node.
	pub fn toggle_connect(&mut self, id: &str) {
		match &self.mode {
			PointerMode::Connecting { source } if source == id => {
				self.mode = PointerMode::Idle;
			}
			_ => {
				if self.node(id).is_some() {
					self.mode = PointerMode::Connecting {
						source: id.to_owned(),
					};
				}
			}
		}
	}

	/// A click on a node body. While armed this completes the connection,
	/// unless the click hit the source itself (which stays armed). Clicks
	/// while idle or dragging do nothing.
	pub fn click_snippet(&mut self, id: &str) {
		let PointerMode::Connecting { source } = &self.mode else {
			return;
		};
		if source == id {
			return;
		}
		let source = source.clone();
		if !self.connections.iter().any(|c| c.joins(&source, id)) {
			self.connections.push(Connection {
				a: source,
				b: id.to_owned(),
			});
		}
		self.mode = PointerMode::Idle;
	}

	/// Escape: drop out of connect mode, wherever the focus is.
	pub fn cancel_connect(&mut self) {
		if matches!(self.mode, PointerMode::Connecting { .. }) {
			self.mode = PointerMode::Idle;
		}
	}

	/// Delete a snippet and every connection touching it in one step, so no
	/// render ever sees a dangling edge. If the interaction mode referenced
	/// the removed node it resets to idle.
	pub fn remove_snippet(&mut self, id: &str) {
		self.nodes.retain(|node| node.id != id);
		self.connections.retain(|c| !c.touches(id));
		let mode_is_stale = match &self.mode {
			PointerMode::Dragging { id: held, .. } => held == id,
			PointerMode::Connecting { source } => source == id,
			PointerMode::Idle => false,
		};
		if mode_is_stale {
			self.mode = PointerMode::Idle;
		}
	}

	pub fn zoom_in(&mut self) {
		self.zoom = (self.zoom + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
	}

	pub fn zoom_out(&mut self) {
		self.zoom = (self.zoom - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
	}

	pub fn is_armed(&self, id: &str) -> bool {
		matches!(&self.mode, PointerMode::Connecting { source } if source == id)
	}

	pub fn is_dragged(&self, id: &str) -> bool {
		matches!(&self.mode, PointerMode::Dragging { id: held, .. } if held == id)
	}

	pub fn is_connecting(&self) -> bool {
		matches!(self.mode, PointerMode::Connecting { .. })
	}

	/// Resolve both endpoints of every connection against the live node
	/// set. Pairs with a missing endpoint are skipped, not drawn dangling.
	pub fn connection_segments(&self) -> Vec<(Point, Point)> {
		self.connections
			.iter()
			.filter_map(|c| {
				let a = self.node(&c.a)?.position;
				let b = self.node(&c.b)?.position;
				Some((anchor(a), anchor(b)))
			})
			.collect()
	}

	/// The dashed feedback line from the armed source to the pointer.
	/// Purely visual; has no effect on the connection set.
	pub fn preview_segment(&self) -> Option<(Point, Point)> {
		let PointerMode::Connecting { source } = &self.mode else {
			return None;
		};
		Some((anchor(self.node(source)?.position), self.pointer))
	}
}

/// Lines attach near the panel body, not its corner.
fn anchor(top_left: Point) -> Point {
	Point::new(top_left.x + NODE_ANCHOR.x, top_left.y + NODE_ANCHOR.y)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn board_with(texts: &[&str]) -> (BoardState, Vec<String>) {
		let mut board = BoardState::new();
		let ids = texts.iter().map(|text| board.add_snippet(text)).collect();
		(board, ids)
	}

	fn connect(board: &mut BoardState, from: &str, to: &str) {
		board.toggle_connect(from);
		board.click_snippet(to);
	}

	#[test]
	fn adds_spawn_distinct_nodes_at_the_default_position() {
		let (board, ids) = board_with(&["a", "b", "c"]);
		assert_eq!(board.nodes.len(), 3);
		for node in &board.nodes {
			assert_eq!(node.position, DEFAULT_SPAWN);
		}
		let mut unique = ids.clone();
		unique.sort();
		unique.dedup();
		assert_eq!(unique.len(), ids.len());
	}

	#[test]
	fn drag_delta_is_invariant_under_zoom() {
		for zoom in [0.5, 1.0, 1.7, 2.0] {
			let (mut board, ids) = board_with(&["drag me"]);
			board.zoom = zoom;
			let start = board.node(&ids[0]).unwrap().position;

			// Grab, then move the pointer by (60, -30) screen pixels.
			board.begin_drag(&ids[0], board.to_board(200.0, 120.0));
			board.pointer_moved(board.to_board(260.0, 90.0));
			board.end_drag();

			let end = board.node(&ids[0]).unwrap().position;
			assert!((end.x - (start.x + 60.0 / zoom)).abs() < 1e-9);
			assert!((end.y - (start.y - 30.0 / zoom)).abs() < 1e-9);
			assert_eq!(board.mode, PointerMode::Idle);
		}
	}

	#[test]
	fn drag_offset_keeps_the_node_from_jumping_to_the_pointer() {
		let (mut board, ids) = board_with(&["a"]);
		// Grab 10px into the panel; the node must not move on grab.
		board.begin_drag(&ids[0], Point::new(60.0, 55.0));
		board.pointer_moved(Point::new(60.0, 55.0));
		assert_eq!(board.node(&ids[0]).unwrap().position, DEFAULT_SPAWN);
	}

	#[test]
	fn drag_does_not_start_while_connect_mode_is_armed() {
		let (mut board, ids) = board_with(&["a", "b"]);
		board.toggle_connect(&ids[0]);
		board.begin_drag(&ids[1], Point::new(55.0, 55.0));
		assert!(board.is_connecting());
		board.pointer_moved(Point::new(400.0, 400.0));
		assert_eq!(board.node(&ids[1]).unwrap().position, DEFAULT_SPAWN);
	}

	#[test]
	fn duplicate_connections_are_no_ops_in_both_orientations() {
		let (mut board, ids) = board_with(&["a", "b"]);
		connect(&mut board, &ids[0], &ids[1]);
		assert_eq!(board.connections.len(), 1);
		connect(&mut board, &ids[0], &ids[1]);
		assert_eq!(board.connections.len(), 1);
		connect(&mut board, &ids[1], &ids[0]);
		assert_eq!(board.connections.len(), 1);
	}

	#[test]
	fn self_click_keeps_the_source_armed() {
		let (mut board, ids) = board_with(&["a"]);
		board.toggle_connect(&ids[0]);
		board.click_snippet(&ids[0]);
		assert!(board.is_armed(&ids[0]));
		assert!(board.connections.is_empty());
	}

	#[test]
	fn completing_a_connection_disarms_even_when_it_already_exists() {
		let (mut board, ids) = board_with(&["a", "b"]);
		connect(&mut board, &ids[0], &ids[1]);
		board.toggle_connect(&ids[0]);
		board.click_snippet(&ids[1]);
		assert_eq!(board.mode, PointerMode::Idle);
	}

	#[test]
	fn arming_a_second_node_switches_the_source() {
		let (mut board, ids) = board_with(&["a", "b"]);
		board.toggle_connect(&ids[0]);
		board.toggle_connect(&ids[1]);
		assert!(board.is_armed(&ids[1]));
		assert!(!board.is_armed(&ids[0]));
	}

	#[test]
	fn toggle_and_escape_both_disarm_without_adding_edges() {
		let (mut board, ids) = board_with(&["a"]);
		board.toggle_connect(&ids[0]);
		board.toggle_connect(&ids[0]);
		assert_eq!(board.mode, PointerMode::Idle);

		board.toggle_connect(&ids[0]);
		board.cancel_connect();
		assert_eq!(board.mode, PointerMode::Idle);
		assert!(board.connections.is_empty());
	}

	#[test]
	fn removing_a_node_cascades_its_connections() {
		let (mut board, ids) = board_with(&["a", "b", "c"]);
		connect(&mut board, &ids[0], &ids[1]);
		connect(&mut board, &ids[1], &ids[2]);
		connect(&mut board, &ids[0], &ids[2]);

		board.remove_snippet(&ids[1]);

		assert_eq!(board.nodes.len(), 2);
		assert_eq!(board.connections.len(), 1);
		for c in &board.connections {
			assert!(board.node(&c.a).is_some());
			assert!(board.node(&c.b).is_some());
		}
	}

	#[test]
	fn connect_then_remove_scenario() {
		let mut board = BoardState::new();
		let a = board.add_snippet("A");
		let b = board.add_snippet("B");
		connect(&mut board, &a, &b);
		board.remove_snippet(&a);

		assert_eq!(board.nodes.len(), 1);
		assert_eq!(board.nodes[0].text, "B");
		assert!(board.connections.is_empty());
	}

	#[test]
	fn zoom_steps_never_leave_the_clamp_range() {
		let mut board = BoardState::new();
		for _ in 0..40 {
			board.zoom_in();
		}
		assert!(board.zoom <= ZOOM_MAX);
		for _ in 0..80 {
			board.zoom_out();
		}
		assert!(board.zoom >= ZOOM_MIN);
	}

	#[test]
	fn zoom_does_not_rescale_stored_positions() {
		let (mut board, ids) = board_with(&["a"]);
		let before = board.node(&ids[0]).unwrap().position;
		board.zoom_in();
		board.zoom_in();
		assert_eq!(board.node(&ids[0]).unwrap().position, before);
	}

	#[test]
	fn segments_skip_connections_with_a_missing_endpoint() {
		let (mut board, ids) = board_with(&["a", "b"]);
		connect(&mut board, &ids[0], &ids[1]);
		// Forced dangling pair; rendering must tolerate it silently.
		board.connections.push(Connection {
			a: ids[0].clone(),
			b: "gone".into(),
		});
		assert_eq!(board.connection_segments().len(), 1);
	}

	#[test]
	fn segments_attach_at_the_anchor_offset() {
		let (mut board, ids) = board_with(&["a", "b"]);
		board.node_mut(&ids[1]).unwrap().position = Point::new(300.0, 200.0);
		connect(&mut board, &ids[0], &ids[1]);

		let segments = board.connection_segments();
		assert_eq!(
			segments,
			vec![(
				Point::new(50.0 + NODE_ANCHOR.x, 50.0 + NODE_ANCHOR.y),
				Point::new(300.0 + NODE_ANCHOR.x, 200.0 + NODE_ANCHOR.y),
			)]
		);
	}

	#[test]
	fn preview_runs_from_the_source_anchor_to_the_pointer() {
		let (mut board, ids) = board_with(&["a"]);
		assert_eq!(board.preview_segment(), None);

		board.toggle_connect(&ids[0]);
		board.pointer_moved(Point::new(400.0, 300.0));
		let (from, to) = board.preview_segment().unwrap();
		assert_eq!(from, Point::new(50.0 + NODE_ANCHOR.x, 50.0 + NODE_ANCHOR.y));
		assert_eq!(to, Point::new(400.0, 300.0));
	}

	#[test]
	fn removing_the_armed_source_resets_the_mode() {
		let (mut board, ids) = board_with(&["a"]);
		board.toggle_connect(&ids[0]);
		board.remove_snippet(&ids[0]);
		assert_eq!(board.mode, PointerMode::Idle);
		assert_eq!(board.preview_segment(), None);
	}

	#[test]
	fn removing_the_dragged_node_resets_the_mode() {
		let (mut board, ids) = board_with(&["a"]);
		board.begin_drag(&ids[0], Point::new(55.0, 55.0));
		board.remove_snippet(&ids[0]);
		assert_eq!(board.mode, PointerMode::Idle);
	}
}
