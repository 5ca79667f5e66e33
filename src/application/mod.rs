// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the widget core and its host.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The widget core is generic over the ports and never names an adapter

pub mod port;
