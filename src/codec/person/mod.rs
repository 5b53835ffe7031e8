//! Codecs for the flat person domain, in two renditions: a tree codec over an
//! already-parsed document, and (behind the `stream` feature) a single-pass
//! token-stream reader and writer that never materialize a tree.
//!
//! The `enabled` member is a tri-state boolean: decoding it is best-effort
//! and never fails. Only the exact literals `"true"` and `"false"` (or a
//! genuine boolean token) produce a value; null, absence, or any other text
//! yield unset.

use serde_json::{Map, Value};

use crate::BindError;
use crate::core::codec::{TreeDecode, TreeEncode};
use crate::core::date::{format_date, parse_date};
use crate::core::node::NodeRef;
use crate::model::Person;

#[cfg(feature = "stream")]
pub mod person_reader;
#[cfg(feature = "stream")]
pub mod person_writer;

#[cfg(feature = "stream")]
pub use person_reader::read_person;
#[cfg(feature = "stream")]
pub use person_writer::write_person;

impl TreeDecode for Person {
    fn decode(node: &Value) -> Result<Self, BindError> {
        let root = NodeRef::root(node);

        let id = root.field("id")?.as_i64()?;
        let name = root.field("name")?.as_str()?.to_string();
        let email = match root.field_opt("email")? {
            Some(field) => field.as_str()?.to_string(),
            None => String::new(),
        };
        let birth_date = match root.field_opt("birthDate")? {
            Some(field) if !field.is_null() => Some(parse_date(field.as_str()?, field.path())?),
            _ => None,
        };
        let enabled = root.field_opt("enabled")?.and_then(|field| tri_state(&field));

        Ok(Person {
            id,
            name,
            email,
            birth_date,
            enabled,
        })
    }
}

impl TreeEncode for Person {
    fn encode(&self) -> Result<Value, BindError> {
        let mut out = Map::new();
        out.insert("id".to_string(), Value::from(self.id));
        out.insert("name".to_string(), Value::from(self.name.as_str()));
        out.insert("email".to_string(), Value::from(self.email.as_str()));
        out.insert(
            "birthDate".to_string(),
            match self.birth_date {
                Some(date) => Value::from(format_date(date)),
                None => Value::Null,
            },
        );
        out.insert(
            "enabled".to_string(),
            match self.enabled {
                Some(flag) => Value::Bool(flag),
                None => Value::Null,
            },
        );
        Ok(Value::Object(out))
    }
}

fn tri_state(node: &NodeRef<'_>) -> Option<bool> {
    match node.value() {
        Value::String(text) => match text.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Bool(flag) => Some(*flag),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::BindError;
    use crate::core::codec::{TreeDecode, TreeEncode};
    use crate::model::Person;

    #[test]
    fn null_enabled_should_map_to_unset() {
        let person = Person::decode(&json!({"id": 12, "name": "John Doe", "enabled": null})).unwrap();
        assert_eq!(12, person.id);
        assert_eq!("John Doe", person.name);
        assert_eq!(None, person.enabled);
    }

    #[test]
    fn literal_strings_should_map_to_booleans() {
        let person = Person::decode(&json!({"id": 12, "name": "John Doe", "enabled": "true"})).unwrap();
        assert_eq!(Some(true), person.enabled);

        let person = Person::decode(&json!({"id": 12, "name": "John Doe", "enabled": "false"})).unwrap();
        assert_eq!(Some(false), person.enabled);
    }

    #[test]
    fn non_literal_text_should_map_to_unset_without_error() {
        for text in ["yes", "True", "FALSE", "1", ""] {
            let person =
                Person::decode(&json!({"id": 12, "name": "John Doe", "enabled": text})).unwrap();
            assert_eq!(None, person.enabled, "input {text:?}");
        }
    }

    #[test]
    fn absent_enabled_should_map_to_unset() {
        let person = Person::decode(&json!({"id": 12, "name": "John Doe"})).unwrap();
        assert_eq!(None, person.enabled);
    }

    #[test]
    fn boolean_token_should_be_accepted_as_is() {
        let person = Person::decode(&json!({"id": 12, "name": "John Doe", "enabled": true})).unwrap();
        assert_eq!(Some(true), person.enabled);
    }

    #[test]
    fn missing_id_should_fail() {
        let result = Person::decode(&json!({"name": "John Doe"}));
        assert!(matches!(result, Err(BindError::MissingField { path }) if path == "id"));
    }

    #[test]
    fn optional_members_should_be_emitted_as_null() {
        let person = Person {
            id: 12,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            birth_date: None,
            enabled: None,
        };

        let tree = person.encode().unwrap();
        assert_eq!(
            json!({
                "id": 12,
                "name": "John Doe",
                "email": "john@example.com",
                "birthDate": null,
                "enabled": null
            }),
            tree
        );
    }
}
