use crate::catalog::model::SecurityControl;
use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use super::codec;

pub const EXPORT_FILE_PREFIX: &str = "security-assessment";
pub const REPORT_FILE_PREFIX: &str = "security-assessment-report";

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn format_date(date: Date) -> CoreResult<String> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}

pub fn parse_date(text: &str) -> CoreResult<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| CoreError::InvalidInput(format!("invalid date {:?}: {}", text, e)))
}

pub fn export_file_name(date: Date) -> CoreResult<String> {
    Ok(format!("{}-{}.json", EXPORT_FILE_PREFIX, format_date(date)?))
}

pub fn report_file_name(date: Date, extension: &str) -> CoreResult<String> {
    Ok(format!(
        "{}-{}.{}",
        REPORT_FILE_PREFIX,
        format_date(date)?,
        extension.trim_start_matches('.')
    ))
}

pub fn write_export(dir: &Path, controls: &[SecurityControl], date: Date) -> CoreResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date)?);
    fs::write(&path, codec::serialize_pretty(controls)?)?;
    Ok(path)
}

pub fn read_import(path: &Path) -> CoreResult<Vec<SecurityControl>> {
    let text = fs::read_to_string(path)?;
    decode_import(&text)
}

pub fn decode_import(text: &str) -> CoreResult<Vec<SecurityControl>> {
    let value = codec::parse_value(text)?;
    codec::check_import_shape(&value)?;
    codec::from_value(value)
}
