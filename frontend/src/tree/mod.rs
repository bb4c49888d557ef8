pub mod state;

pub use state::{Expansion, FetchRequest, RootState, TreeEvent, TreeNode, TreeState};
