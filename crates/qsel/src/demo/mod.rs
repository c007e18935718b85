//! Demo greeter components
//!
//! Six greeters register themselves in the `COMPONENTS` slice:
//!
//! | Name | Tags | Ranking | Primary |
//! |------|------|---------|---------|
//! | `simpleGreeter` | official | | |
//! | `formalGreeter` | official, formal | | |
//! | `priorityGreeter` | | order 1000 | |
//! | `highestPriorityGreeter` | | order 10000 | |
//! | `defaultGreeter` | | | yes |
//! | `countryStyleGreeter` | country-style | | |

mod greeters;

pub use greeters::{
    COUNTRY_STYLE, CountryStyleGreeter, DefaultGreeter, FORMAL, FormalGreeter, Greeter,
    HighestPriorityGreeter, OFFICIAL, PriorityGreeter, SimpleGreeter,
};
