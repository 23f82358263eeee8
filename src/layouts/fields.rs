//! Raw layout field values and the typed readers layouts build their configs from

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};
use crate::logo_assets::LogoId;
use crate::models::Theme;

/// Field name to raw value, as received from a query string or the CLI
pub type Fields = BTreeMap<String, String>;

/// Parse `Key=Value` assignments. Later assignments win.
pub fn parse_assignments<I, S>(assignments: I) -> AppResult<Fields>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fields = Fields::new();
    for assignment in assignments {
        let assignment = assignment.as_ref();
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            AppError::invalid_field(assignment, "expected Key=Value")
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::invalid_field(assignment, "field name is empty"));
        }
        fields.insert(key.to_string(), value.to_string());
    }
    Ok(fields)
}

pub(crate) fn required(fields: &Fields, name: &str) -> AppResult<String> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| AppError::invalid_field(name, "is required"))
}

pub(crate) fn optional(fields: &Fields, name: &str) -> Option<String> {
    fields.get(name).cloned()
}

/// Text field whose default applies only when the field is absent
pub(crate) fn text_or(fields: &Fields, name: &str, default: &str) -> String {
    optional(fields, name).unwrap_or_else(|| default.to_string())
}

/// Select field parsed into `T`, with `allowed` listed in the error message
pub(crate) fn choice<T: FromStr>(
    fields: &Fields,
    name: &str,
    default: T,
    allowed: &[String],
) -> AppResult<T> {
    match fields.get(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::invalid_field(
                name,
                format!("'{}' is not one of {}", raw, allowed.join(", ")),
            )
        }),
    }
}

pub(crate) fn logo(fields: &Fields, default: LogoId) -> AppResult<LogoId> {
    match fields.get("Logo") {
        None => Ok(default),
        Some(raw) => LogoId::parse(raw)
            .map_err(|_| AppError::invalid_field("Logo", format!("unknown logo '{}'", raw))),
    }
}

/// Theme names are matched case-insensitively
pub(crate) fn theme(fields: &Fields) -> AppResult<Theme> {
    match fields.get("Theme") {
        None => Ok(Theme::default()),
        Some(raw) => raw.to_lowercase().parse().map_err(|_| {
            AppError::invalid_field("Theme", format!("'{}' is not one of light, dark", raw))
        }),
    }
}
