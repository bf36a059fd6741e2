use crate::error::Result;
use crate::models::{RepoRow, UserRow};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column order of the two datasets. This is the compatibility contract for
/// downstream consumers and must match the row struct field order.
pub const USER_COLUMNS: [&str; 11] = [
    "login",
    "name",
    "company",
    "location",
    "email",
    "hireable",
    "bio",
    "public_repos",
    "followers",
    "following",
    "created_at",
];

pub const REPO_COLUMNS: [&str; 9] = [
    "login",
    "full_name",
    "created_at",
    "stargazers_count",
    "watchers_count",
    "language",
    "has_projects",
    "has_wiki",
    "license_name",
];

// The header is written explicitly so that an empty run still produces a
// file with the full column set.
fn write_rows<T: Serialize, W: Write>(out: W, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_users(path: &Path, rows: &[UserRow]) -> Result<()> {
    write_rows(std::fs::File::create(path)?, &USER_COLUMNS, rows)?;
    info!(count = rows.len(), path = %path.display(), "user data saved");
    Ok(())
}

pub fn write_repositories(path: &Path, rows: &[RepoRow]) -> Result<()> {
    write_rows(std::fs::File::create(path)?, &REPO_COLUMNS, rows)?;
    info!(count = rows.len(), path = %path.display(), "repository data saved");
    Ok(())
}
