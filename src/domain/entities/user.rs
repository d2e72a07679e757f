use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, age: u32, city: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            age,
            city: city.into(),
        }
    }
}

/// A sortable field of [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    Id,
    Name,
    Age,
    City,
}

impl UserColumn {
    pub const ALL: [UserColumn; 4] = [
        UserColumn::Id,
        UserColumn::Name,
        UserColumn::Age,
        UserColumn::City,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserColumn::Id => "ID",
            UserColumn::Name => "Name",
            UserColumn::Age => "Age",
            UserColumn::City => "City",
        }
    }

    /// Ascending comparison of two users on this column.
    ///
    /// Text columns compare case-insensitively, numeric columns by value.
    /// Users with equal keys compare `Equal`; there is no secondary key.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            UserColumn::Id => a.id.cmp(&b.id),
            UserColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            UserColumn::Age => a.age.cmp(&b.age),
            UserColumn::City => a.city.to_lowercase().cmp(&b.city.to_lowercase()),
        }
    }

    pub fn display_value(self, user: &User) -> String {
        match self {
            UserColumn::Id => user.id.0.to_string(),
            UserColumn::Name => user.name.clone(),
            UserColumn::Age => user.age.to_string(),
            UserColumn::City => user.city.clone(),
        }
    }
}
