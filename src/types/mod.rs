//! All data types for the tinygraph library.

pub mod edge;
pub mod error;
pub mod key;
pub mod node;
pub mod record;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use key::{EdgeKey, GraphId, NodeKey};
pub use node::Node;
pub use record::{EdgeRecord, GraphData, NodeRecord};
