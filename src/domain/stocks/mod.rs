//! Stock listing aggregate containing entities, services and value objects.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
