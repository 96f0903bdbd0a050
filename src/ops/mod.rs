pub mod filter;
pub mod form;
pub mod task_ops;
