// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Student records and roster loading.

mod record;
mod roster;

pub use record::Student;
pub use roster::{load_roster, parse_roster, RosterFormat};
