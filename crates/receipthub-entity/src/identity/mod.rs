//! Identity entities: organizations, memberships, and role assignments.

pub mod member;
pub mod org;
pub mod role;

pub use member::{OrgMemberInsert, OrgMemberRow, OrgMemberUpdate};
pub use org::{OrgInsert, OrgRow, OrgUpdate};
pub use role::{AppRole, MemberRoleInsert, MemberRoleRow, MemberRoleUpdate, UserRoleRow};
