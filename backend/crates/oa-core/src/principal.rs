use crate::Role;

use std::collections::BTreeSet;

/// Contract an authenticatable principal satisfies for the authentication layer.
///
/// Semantics are fixed by the consumer: implementations backed by an external
/// identity provider report an empty password and no salt.
pub trait Principal {
    fn username(&self) -> &str;

    /// Local credential used for password checks. Empty when authentication
    /// is delegated to an external provider.
    fn password(&self) -> &str;

    fn salt(&self) -> Option<&str>;

    fn roles(&self) -> BTreeSet<Role>;

    /// Drop any transient credential material held after authentication.
    fn erase_credentials(&mut self);

    fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}
