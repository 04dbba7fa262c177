//! Error type for graph import and export.

/// Errors raised at the JSON boundary of the graph model.
///
/// Classification never fails; only loading and serializing can.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
	/// The document lacks a `nodes` or `edges` field.
	#[error("invalid graph format")]
	InvalidFormat,

	/// The text was not JSON, or an entry had the wrong shape.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for graph import and export.
pub type Result<T> = std::result::Result<T, GraphError>;
