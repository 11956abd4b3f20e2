//! SQL for the label repository, one module per concern.

pub mod label_ops;
pub mod label_query;
