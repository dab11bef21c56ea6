use error_stack::Report;

pub type ServiceResult<T, E> = Result<T, Report<E>>;

pub mod error;
pub mod routes;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;
