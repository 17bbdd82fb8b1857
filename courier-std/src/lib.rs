//! # courier-std
//!
//! Standard implementations for the Courier in-process dispatch engine.
//!
//! This crate provides:
//! - **Registry**: [`Registry`] and [`RegistryBuilder`], type-keyed,
//!   frozen-after-build binding storage
//! - **Dispatchers**: [`RequestDispatcher`] and [`NotificationPublisher`]
//! - **Facade**: [`Bus`], the single entry point over both dispatchers
//! - **Standard behaviors**: logging, cancellation guard, timeout
//! - **Testing utilities**: recording and counting doubles
//!
//! [`Registry`]: registry::Registry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`RequestDispatcher`]: dispatch::RequestDispatcher
//! [`NotificationPublisher`]: publish::NotificationPublisher
//! [`Bus`]: bus::Bus

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use courier_core;

// Modules
pub mod behaviors;
pub mod bus;
pub mod dispatch;
pub mod publish;
pub mod registry;
pub mod testing;
