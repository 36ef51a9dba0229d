pub mod error;
pub mod id;
pub mod vertex;

pub use error::{Error, Result};
pub use id::VertexId;
pub use vertex::Vertex;
