//! The immutable, process-wide spec database (spec.md §3 "Spec Database").
//!
//! Five record families, each a [`once_cell::sync::Lazy`] static table built
//! once at first access and read-only thereafter, giving every lookup and
//! membership test used by [`crate::validator`] O(1) cost with no dynamic
//! registration.

pub mod enums;
pub mod jmessage;
pub mod npg;
pub mod platform_type;
pub mod role;

pub use enums::{CLASSIFICATIONS, DATA_RATES, LINK_TYPES, OPERATING_MODES};
pub use jmessage::JMessage;
pub use npg::Npg;
pub use platform_type::PlatformType;
pub use role::Role;
