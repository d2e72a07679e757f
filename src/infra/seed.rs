use crate::domain::entities::user::User;
use crate::usecase::ports::source::UserSource;

const SEED_USERS: [(u32, &str, u32, &str); 12] = [
    (1, "John", 25, "Delhi"),
    (2, "Aman", 30, "Mumbai"),
    (3, "Riya", 22, "Noida"),
    (4, "Sara", 28, "Pune"),
    (5, "Dev", 35, "Chennai"),
    (6, "Neha", 27, "Kolkata"),
    (7, "Jay", 24, "Jaipur"),
    (8, "Rohan", 29, "Hyderabad"),
    (9, "Meera", 26, "Bangalore"),
    (10, "Sam", 31, "Ahmedabad"),
    (11, "Pooja", 23, "Lucknow"),
    (12, "Ravi", 32, "Indore"),
];

/// The built-in user directory shown by the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedUsers;

impl UserSource for SeedUsers {
    fn load_users(&self) -> Vec<User> {
        SEED_USERS
            .iter()
            .map(|&(id, name, age, city)| User::new(id, name, age, city))
            .collect()
    }
}
