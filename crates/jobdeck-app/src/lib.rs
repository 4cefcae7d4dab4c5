// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod capability;
pub mod catalog;
pub mod editor;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod ids;
pub mod model;
pub mod presentation;
pub mod records;
pub mod selection;
pub mod state;

pub use capability::*;
pub use editor::*;
pub use errors::*;
pub use filter::{filter, normalize};
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use presentation::*;
pub use records::*;
pub use selection::*;
pub use state::*;
