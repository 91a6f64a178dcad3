//! Core domain entities representing the directory data model.
//!
//! Entities are plain data structures without business logic. Creation and
//! partial-update inputs get their own companion structs (`NewUser`,
//! `UpdateUser`, ...) so repositories never accept half-initialized entities.

pub mod membership;
pub mod organization;
pub mod user;

pub use membership::{Membership, NewMembership};
pub use organization::{NewOrganization, Organization, UpdateOrganization};
pub use user::{NewUser, UpdateUser, User};
