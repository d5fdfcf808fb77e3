pub mod backtrack;
pub mod binary_tree;
pub mod division;
pub mod kruskal;
pub mod prim;
pub mod wilson;
