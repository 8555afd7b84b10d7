/// Graph analysis domain layer
///
/// Pure business logic: the settings record, the adjacency model, the two
/// parse strategies and the bounded traversal. Nothing here performs I/O.
pub mod domain;
pub mod services;
