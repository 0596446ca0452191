pub mod deserializers;
pub mod pagination;
