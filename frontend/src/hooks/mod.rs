pub mod use_tree;
