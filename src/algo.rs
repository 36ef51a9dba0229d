pub mod connected;
pub mod connected_components;
pub mod toposort;

pub use connected::is_path_between;
pub use connected_components::{
    is_strongly_connected, strongly_connected_components, StronglyConnectedComponents,
};
pub use toposort::{topological_sort, TopoSort};
