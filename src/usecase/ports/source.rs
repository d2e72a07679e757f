use crate::domain::entities::user::User;

/// Supplies the read-only records a list view is built over.
pub trait UserSource {
    fn load_users(&self) -> Vec<User>;
}
