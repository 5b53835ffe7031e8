use std::io::Write;

use struson::writer::{JsonStreamWriter, JsonWriter};

use crate::BindError;
use crate::core::date::format_date;
use crate::model::Person;

/// Writes `person` as one flat object at the current position of a token
/// stream. Optional members are emitted as the null literal, not omitted, so
/// the output shape is stable across values.
pub fn write_person<W: Write>(
    json_writer: &mut JsonStreamWriter<W>,
    person: &Person,
) -> Result<(), BindError> {
    json_writer.begin_object()?;

    json_writer.name("id")?;
    json_writer.number_value(person.id)?;
    json_writer.name("name")?;
    json_writer.string_value(&person.name)?;
    json_writer.name("email")?;
    json_writer.string_value(&person.email)?;

    json_writer.name("birthDate")?;
    match person.birth_date {
        Some(date) => json_writer.string_value(&format_date(date))?,
        None => json_writer.null_value()?,
    }

    json_writer.name("enabled")?;
    match person.enabled {
        Some(flag) => json_writer.bool_value(flag)?,
        None => json_writer.null_value()?,
    }

    json_writer.end_object()?;
    Ok(())
}
