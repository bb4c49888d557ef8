pub mod exercise_list;
pub mod person_panel;
pub mod status_bar;
pub mod tree_view;

pub use exercise_list::ExerciseList;
pub use person_panel::PersonPanel;
pub use status_bar::StatusBar;
pub use tree_view::TreeView;
