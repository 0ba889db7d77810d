pub mod dependent_select;
