pub mod emitter;
pub mod service;
