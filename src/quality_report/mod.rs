/// Domain layer: report models and pagination rules
pub mod domain;
pub mod services;
