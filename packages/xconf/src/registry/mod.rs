//! Class registry system for building objects from configuration.
//!
//! Classes are registered with their constructor signatures. An
//! `<object class="...">` element can only instantiate registered classes,
//! and a typed constructor is chosen by exact match on argument types.

pub mod builtins;
mod class;
mod config;
mod core;

pub use class::{
    boxed, missing_argument, Access, ClassDescriptor, Constructor, ConstructorFn,
    ConstructorResult,
};
pub use config::create_default_registry;
pub use core::ClassRegistry;
