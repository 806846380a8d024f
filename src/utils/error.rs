use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("invalid component id {id:?}: {reason}")]
    InvalidId { id: String, reason: String },

    #[error("component name cannot be empty")]
    InvalidName,

    #[error("unit cost must be a non-negative number, got {value}")]
    InvalidUnitCost { value: f64 },

    #[error("lead time days must be non-negative, got {value}")]
    InvalidLeadTime { value: i64 },

    #[error("product id cannot be empty")]
    InvalidProductId,

    #[error("product name cannot be empty")]
    InvalidProductName,

    #[error("component with id {id:?} not found")]
    ComponentNotFound { id: String },

    #[error("quantity must be a positive number, got {value}")]
    InvalidQuantity { value: f64 },

    #[error("component with id {id:?} already exists")]
    DuplicateId { id: String },

    #[error("product id {id:?} already exists")]
    DuplicateProductId { id: String },

    #[error("no entry with id {id:?}")]
    NotFound { id: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
