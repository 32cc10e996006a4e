use super::definition::FlowSnapshot;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a [`FlowSnapshot`].
///
/// This is the primary extension point for making hokan format-agnostic. The
/// crate ships one implementation for the editor's JSON shape
/// ([`UiGraph`](crate::ui::UiGraph)); hosts with their own graph
/// representation implement this trait to supply snapshots directly.
///
/// # Example
///
/// ```rust,no_run
/// use hokan::error::ConversionError;
/// use hokan::flow::{ExecutionState, FlowSnapshot, IntoSnapshot, NodeSnapshot};
///
/// struct MyNode { id: String }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// impl IntoSnapshot for MyGraph {
///     fn into_snapshot(self) -> Result<FlowSnapshot, ConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|node| NodeSnapshot {
///                 id: node.id,
///                 output_schema: None,
///                 output_values: None,
///                 state: ExecutionState::NotRun,
///             })
///             .collect();
///
///         Ok(FlowSnapshot {
///             nodes,
///             edges: vec![],
///             revision: 0,
///         })
///     }
/// }
/// ```
pub trait IntoSnapshot {
    /// Consumes the object and converts it into a resolvable snapshot.
    fn into_snapshot(self) -> Result<FlowSnapshot, ConversionError>;
}
