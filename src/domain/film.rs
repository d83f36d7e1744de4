use chrono::NaiveDate;

/// A film description may not exceed this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// First public film screening; no release date may precede it.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("1895-12-28 is a valid calendar date")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}

/// A validated film that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}

/// Partial update: only `Some` fields overwrite the stored record.
#[derive(Debug, Clone, Default)]
pub struct FilmPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
}
