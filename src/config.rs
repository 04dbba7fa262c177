//! Display and layout constants shared by the core and the canvas.

/// Radius every node is drawn and hit-tested with. Loaded nodes are normalized to it.
pub const NODE_RADIUS: f64 = 20.0;

/// Node fill.
pub const NODE_COLOR: &str = "#4285F4";
/// Fill of the selected node and of the start of a pending edge.
pub const NODE_SELECTED_COLOR: &str = "#EA4335";
/// Node outline.
pub const NODE_STROKE_COLOR: &str = "#5F6368";
/// Color given to edges added without one.
pub const EDGE_COLOR: &str = "#5F6368";
/// Node label.
pub const TEXT_COLOR: &str = "#FFFFFF";
/// Edge color of the generated K₅.
pub const K5_COLOR: &str = "#EA4335";
/// Edge color of the generated K₃,₃.
pub const K33_COLOR: &str = "#9C27B0";
/// Dashed edge following the pointer in add-edge mode.
pub const TEMP_EDGE_COLOR: &str = "rgba(95, 99, 104, 0.5)";
/// Canvas background.
pub const CANVAS_BG: &str = "#FFFFFF";

/// CSS font size of node labels.
pub const NODE_TEXT_SIZE: &str = "14px";
/// Stroke width of edges, in CSS pixels.
pub const EDGE_WIDTH: f64 = 2.0;

/// Simulation steps run by a single "relax layout" request.
pub const RELAX_STEPS: usize = 300;
/// Fixed timestep fed to the force simulation.
pub const RELAX_DT: f32 = 0.016;
