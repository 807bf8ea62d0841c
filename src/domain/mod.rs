// SPDX-License-Identifier: MPL-2.0
//! Domain layer - catalog records and their failure values.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `thiserror` derives it depends on nothing but `std`, so every
//! rule here can be tested without a runtime or a network.
//!
//! # Modules
//!
//! - [`error`]: Lookup and sampling failures ([`FetchFailed`](error::FetchFailed),
//!   [`SampleError`](error::SampleError))
//! - [`record`]: Catalog records ([`Record`](record::Record),
//!   [`RecordId`](record::RecordId)) and the display-name rules

pub mod error;
pub mod record;
