use std::io::Read;

use log::debug;
use struson::reader::{JsonReader, JsonStreamReader, ValueType};

use crate::BindError;
use crate::core::date::parse_date;
use crate::model::Person;

/// Reads one flat person object from the current position of a token stream.
///
/// Single linear scan: capture the next member name, advance to its value,
/// dispatch on the captured name. Unknown members are skipped wholesale and
/// nested objects are not supported, matching the flat input shape.
pub fn read_person<R: Read>(json_reader: &mut JsonStreamReader<R>) -> Result<Person, BindError> {
    let mut person = Person::default();

    json_reader.begin_object()?;
    while json_reader.has_next()? {
        let name = json_reader.next_name_owned()?;
        match name.as_str() {
            "id" => person.id = next_integer(json_reader, "id")?,
            "name" => person.name = json_reader.next_string()?,
            "email" => person.email = json_reader.next_string()?,
            "birthDate" => {
                person.birth_date = if json_reader.peek()? == ValueType::Null {
                    json_reader.next_null()?;
                    None
                } else {
                    let text = json_reader.next_string()?;
                    Some(parse_date(&text, "birthDate")?)
                }
            }
            "enabled" => person.enabled = next_tri_state(json_reader)?,
            _ => json_reader.skip_value()?,
        }
    }
    json_reader.end_object()?;

    debug!("scanned person {}", person.id);
    Ok(person)
}

fn next_integer<R: Read>(
    json_reader: &mut JsonStreamReader<R>,
    path: &str,
) -> Result<i64, BindError> {
    match json_reader.next_number::<i64>()? {
        Ok(value) => Ok(value),
        Err(_) => Err(BindError::TypeMismatch {
            path: path.to_string(),
            expected: "integer",
            found: "number",
        }),
    }
}

/// Best-effort tri-state decoding over the token stream. Unparseable input is
/// consumed and reported as unset, never as an error.
fn next_tri_state<R: Read>(
    json_reader: &mut JsonStreamReader<R>,
) -> Result<Option<bool>, BindError> {
    let value = match json_reader.peek()? {
        ValueType::Null => {
            json_reader.next_null()?;
            None
        }
        ValueType::String => match json_reader.next_string()?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        ValueType::Boolean => Some(json_reader.next_bool()?),
        _ => {
            json_reader.skip_value()?;
            None
        }
    };
    Ok(value)
}
