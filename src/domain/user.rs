use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// A validated user that has not been assigned an id yet.
/// `name` is already defaulted to `login` when the caller left it out.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// Partial update: only `Some` fields overwrite the stored record.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}
