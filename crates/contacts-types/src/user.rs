//! User types

use crate::error::{ContactsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Contact record
///
/// Field values are stored as the client sent them; only their presence is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Value,
    pub surname: Value,
    pub phone: Value,
    pub address: Value,
}

impl User {
    /// Create a user with a freshly generated id
    pub fn new(
        name: impl Into<Value>,
        surname: impl Into<Value>,
        phone: impl Into<Value>,
        address: impl Into<Value>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            surname: surname.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Overwrite the fields present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            self.surname = surname;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}

/// Marks a key as present even when its value is `null`
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// User creation request
///
/// `None` means the key was absent from the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub surname: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub address: Option<Value>,
}

impl NewUser {
    /// Build a [`User`] with a generated id, failing if any key is absent
    pub fn into_user(self) -> Result<User> {
        match (self.name, self.surname, self.phone, self.address) {
            (Some(name), Some(surname), Some(phone), Some(address)) => {
                Ok(User::new(name, surname, phone, address))
            }
            _ => Err(ContactsError::MissingFields),
        }
    }
}

/// User update request (partial)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub surname: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub address: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> NewUser {
        NewUser {
            name: Some(json!("Test")),
            surname: Some(json!("User")),
            phone: Some(json!("1234567890")),
            address: Some(json!("Test Address")),
        }
    }

    #[test]
    fn test_into_user_generates_id() {
        let user = sample().into_user().unwrap();
        assert!(!user.id.is_empty());
        assert!(uuid::Uuid::parse_str(&user.id).is_ok());
        assert_eq!(user.name, "Test");
        assert_eq!(user.surname, "User");
        assert_eq!(user.phone, "1234567890");
        assert_eq!(user.address, "Test Address");

        let other = sample().into_user().unwrap();
        assert_ne!(user.id, other.id);
    }

    #[test]
    fn test_into_user_missing_field() {
        let mut req = sample();
        req.phone = None;
        assert_eq!(req.into_user(), Err(ContactsError::MissingFields));

        assert_eq!(
            NewUser::default().into_user(),
            Err(ContactsError::MissingFields)
        );
    }

    #[test]
    fn test_new_user_ignores_client_id() {
        let req: NewUser = serde_json::from_str(
            r#"{"id":"mine","name":"A","surname":"B","phone":"1","address":"X"}"#,
        )
        .unwrap();
        let user = req.into_user().unwrap();
        assert_ne!(user.id, "mine");
    }

    #[test]
    fn test_null_and_non_string_values_count_as_present() {
        let req: NewUser = serde_json::from_str(
            r#"{"name":null,"surname":"B","phone":1234567890,"address":"X"}"#,
        )
        .unwrap();
        let user = req.into_user().unwrap();
        assert_eq!(user.name, Value::Null);
        assert_eq!(user.phone, json!(1234567890));
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let patch: UserPatch = serde_json::from_str(r#"{"name":null,"phone":5551234}"#).unwrap();
        assert_eq!(patch.name, Some(Value::Null));
        assert_eq!(patch.phone, Some(json!(5551234)));
        assert_eq!(patch.surname, None);
        assert_eq!(patch.address, None);
    }

    #[test]
    fn test_apply_overwrites_only_supplied_fields() {
        let mut user = sample().into_user().unwrap();
        let id = user.id.clone();

        user.apply(UserPatch {
            phone: Some(json!("555")),
            ..Default::default()
        });

        assert_eq!(user.id, id);
        assert_eq!(user.name, "Test");
        assert_eq!(user.surname, "User");
        assert_eq!(user.phone, "555");
        assert_eq!(user.address, "Test Address");
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = sample().into_user().unwrap();
        let value = serde_json::to_value(&user).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["id", "name", "surname", "phone", "address"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj.len(), 5);
    }
}
