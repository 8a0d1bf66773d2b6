use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn is_read(&self) -> bool;
}
