// SPDX-License-Identifier: MPL-2.0
//! Catalog record domain types.
//!
//! - [`RecordId`]: positive catalog identifier
//! - [`Record`]: normalized catalog item with its [`Ability`], [`Category`]
//!   and [`Vitals`] data
//! - [`naming`]: display-name rules shared by records, abilities and stats

pub mod naming;
mod newtypes;
mod types;

pub use newtypes::{ParseRecordIdError, RecordId};
pub use types::{Ability, BaseStat, Category, Record, Vitals};
