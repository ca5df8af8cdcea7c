//! Owner and group name resolution

use nix::unistd::{Gid, Group, Uid, User};

/// Resolves numeric user and group ids to names.
///
/// A miss returns `None`; callers render the numeric id instead.
pub trait OwnerLookup {
    fn user_name(&self, uid: u32) -> Option<String>;

    fn group_name(&self, gid: u32) -> Option<String>;

    /// User name, or the uid as text when it has no entry.
    fn owner_or_id(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| uid.to_string())
    }

    /// Group name, or the gid as text when it has no entry.
    fn group_or_id(&self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| gid.to_string())
    }
}

/// Lookups against the system user and group databases.
///
/// Nothing is cached: every call is a fresh query.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOwners;

impl OwnerLookup for SystemOwners {
    fn user_name(&self, uid: u32) -> Option<String> {
        User::from_uid(Uid::from_raw(uid))
            .ok()
            .flatten()
            .map(|user| user.name)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        Group::from_gid(Gid::from_raw(gid))
            .ok()
            .flatten()
            .map(|group| group.name)
    }
}
