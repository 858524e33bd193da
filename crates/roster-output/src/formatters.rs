use serde::Serialize;

use roster_registry::User;

use crate::{AddResult, DemoResult, ListResult};

pub fn format_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "Current users:\n(no users)".to_string();
    }
    let mut lines = vec!["Current users:".to_string()];
    lines.extend(users.iter().map(|u| u.display_name()));
    lines.join("\n")
}

pub fn format_list_result(result: &ListResult) -> String {
    format_users(result.users)
}

pub fn format_add_result(result: &AddResult) -> String {
    match result {
        AddResult::Added { added } => format!("Added user: {}", added.display_name()),
        AddResult::Rejected { error } => format!("Error: {}", error),
    }
}

pub fn format_demo_result(result: &DemoResult) -> String {
    let mut lines: Vec<String> = result.errors.iter().map(|e| format!("Error: {}", e)).collect();
    lines.push(format_users(result.users));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_registry::{create_user, ValidationError};

    fn users() -> Vec<User> {
        vec![
            create_user("Juan Pérez", "juan.perez@email.com").unwrap(),
            create_user("Ana Gómez", "ana.gomez@email.com").unwrap(),
        ]
    }

    #[test]
    fn test_format_users() {
        assert_eq!(
            format_users(&users()),
            "Current users:\nJuan Pérez <juan.perez@email.com>\nAna Gómez <ana.gomez@email.com>"
        );
        assert_eq!(format_users(&[]), "Current users:\n(no users)");
    }

    #[test]
    fn test_format_add_result() {
        let users = users();
        let added = AddResult::from_outcome(Ok(&users[0]));
        assert_eq!(
            format_add_result(&added),
            "Added user: Juan Pérez <juan.perez@email.com>"
        );

        let rejected = AddResult::from_outcome(Err(ValidationError::DuplicateEmail {
            email: "ana.gomez@email.com".to_string(),
        }));
        assert_eq!(
            format_add_result(&rejected),
            "Error: duplicate email: ana.gomez@email.com"
        );
    }

    #[test]
    fn test_add_result_json_shape() {
        let users = users();
        let added = serde_json::to_value(AddResult::from_outcome(Ok(&users[1]))).unwrap();
        assert_eq!(
            added,
            serde_json::json!({"added": {"name": "Ana Gómez", "email": "ana.gomez@email.com"}})
        );

        let rejected = serde_json::to_value(AddResult::from_outcome(Err(
            ValidationError::NameTooShort { min: 2 },
        )))
        .unwrap();
        assert_eq!(
            rejected,
            serde_json::json!({"error": "name must be at least 2 characters"})
        );
    }

    #[test]
    fn test_format_demo_result() {
        let users = users();
        let result = DemoResult {
            users: &users,
            errors: vec!["duplicate email: juan.perez@email.com".to_string()],
        };
        let text = format_demo_result(&result);
        assert!(text.starts_with("Error: duplicate email: juan.perez@email.com\nCurrent users:\n"));

        let json = serde_json::to_value(DemoResult {
            users: &users,
            errors: vec![],
        })
        .unwrap();
        assert!(json.get("errors").is_none());
        assert_eq!(json["users"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_list_result_json() {
        let users = users();
        let text = format_json(&ListResult { users: &users }).unwrap();
        assert!(text.contains("\"name\": \"Juan Pérez\""));
    }
}
