// SPDX-License-Identifier: MPL-2.0
//! Photo collection domain types.

mod collection;

pub use collection::{Collection, CollectionEntry, CollectionError, ImageRecord};
