//! Catalog entities and their association tables.
//!
//! Column types, lengths, and check constraints are enforced by the DDL in
//! the `migration` crate; the entities here mirror that schema and carry
//! the delete semantics on their relation definitions.

pub mod ad;
pub mod card;
pub mod category;
pub mod city;
pub mod filter;
pub mod parameter;
pub mod region;
pub mod user;

pub mod card_city;
pub mod category_ad;
pub mod category_card;
pub mod filter_card;
pub mod filter_category;
pub mod parameter_card;
