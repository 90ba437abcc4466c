use std::{fs, path::Path};

use log::{debug, info};
use serde_json::{Map, Value};

use crate::{
    error::{Error, Kind},
    value::{Document, Location, Shape, HEIGHT, TEXT, WIDTH},
};

/// Counts gathered by a successful validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Report {
    pub arrays: usize,
    pub records: usize,
    pub checks: usize,
}

pub fn decode(text: &str) -> Result<Value, Error> {
    let value = serde_json::from_str(text)?;

    Ok(value)
}

pub fn decode_document(text: &str) -> Result<Document, Error> {
    let document = serde_json::from_str(text)?;

    Ok(document)
}

/// Checks every record of `shape` inside `value`, stopping at the first
/// failure.
///
/// Keys, indexes and fields that are absent, or containers of the wrong JSON
/// type, are lookup errors. A field that is present with another value is an
/// assertion error. Anything beyond `shape` is ignored.
pub fn validate(value: &Value, shape: Shape) -> Result<Report, Error> {
    let root = value
        .as_object()
        .ok_or_else(|| Error::at(Location::root(), Kind::NotAnObject))?;

    debug!("Validating {} records ({})", shape.total_records(), shape);

    let mut report = Report::default();

    for i in 0..shape.arrays {
        let key = Shape::key(i);

        let array = root
            .get(&key)
            .ok_or_else(|| Error::at(Location::root(), Kind::MissingKey(key.clone())))?
            .as_array()
            .ok_or_else(|| Error::at(Location::array(&key), Kind::NotAnArray))?;

        for j in 0..shape.records {
            let record = array
                .get(j)
                .ok_or_else(|| Error::at(Location::array(&key), Kind::MissingIndex(j)))?
                .as_object()
                .ok_or_else(|| Error::at(Location::record(&key, j), Kind::NotAnObject))?;

            check_number(record, &key, j, "width", WIDTH)?;
            check_number(record, &key, j, "height", HEIGHT)?;
            check_text(record, &key, j, "text", TEXT)?;

            report.records += 1;
            report.checks += 3;
        }

        report.arrays += 1;
    }

    info!(
        "Validated {} records in {} arrays ({} checks)",
        report.records, report.arrays, report.checks
    );

    Ok(report)
}

pub fn validate_str(text: &str, shape: Shape) -> Result<Report, Error> {
    let value = decode(text)?;

    validate(&value, shape)
}

pub fn validate_file<P: AsRef<Path>>(path: P, shape: Shape) -> Result<Report, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;

    debug!("Read {} bytes from {}", text.len(), path.display());

    validate_str(&text, shape)
}

fn field<'a>(
    record: &'a Map<String, Value>,
    key: &str,
    index: usize,
    name: &'static str,
) -> Result<&'a Value, Error> {
    record
        .get(name)
        .ok_or_else(|| Error::at(Location::record(key, index), Kind::MissingKey(name.into())))
}

fn check_number(
    record: &Map<String, Value>,
    key: &str,
    index: usize,
    name: &'static str,
    expected: f64,
) -> Result<(), Error> {
    let value = field(record, key, index, name)?;

    match value.as_f64() {
        Some(found) if found == expected => Ok(()),
        _ => Err(Error::mismatch(
            Location::field(key, index, name),
            format!("{:?}", expected),
            value.to_string(),
        )),
    }
}

fn check_text(
    record: &Map<String, Value>,
    key: &str,
    index: usize,
    name: &'static str,
    expected: &str,
) -> Result<(), Error> {
    let value = field(record, key, index, name)?;

    match value.as_str() {
        Some(found) if found == expected => Ok(()),
        _ => Err(Error::mismatch(
            Location::field(key, index, name),
            format!("{:?}", expected),
            value.to_string(),
        )),
    }
}
