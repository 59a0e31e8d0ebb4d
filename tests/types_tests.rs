mod common;

#[cfg(test)]
pub mod types_tests {
    use serde_json::json;

    use signin::types::*;

    #[test]
    fn test_error_path_from_str() {
        assert_eq!(ErrorPath::from("email"), ErrorPath::Field(Field::Email));
        assert_eq!(ErrorPath::from("password"), ErrorPath::Field(Field::Password));
        assert_eq!(ErrorPath::from("root"), ErrorPath::root());
        assert_eq!(ErrorPath::from("root.server"), ErrorPath::root_with("server"));
        assert_eq!(ErrorPath::from("remember"), ErrorPath::Root("remember".to_string()));
        assert!(ErrorPath::from("root").is_root());
        assert_eq!(ErrorPath::from("email").field(), Some(Field::Email));
    }

    #[test]
    fn test_field_error_deserialize_success() {
        let errors: Vec<FieldError> = serde_json::from_value(json!([
            { "type": "password", "message": "Invalid credentials" },
            { "type": "root.serverError", "message": "Down for maintenance" },
        ]))
        .unwrap();

        assert_eq!(
            errors,
            vec![
                FieldError::new(Field::Password, "Invalid credentials"),
                FieldError::new(
                    ErrorPath::root_with("serverError"),
                    "Down for maintenance"
                ),
            ]
        );
    }

    #[test]
    fn test_field_error_serialize_success() {
        let value = serde_json::to_value(FieldError::new(Field::Email, "Check your email address"))
            .unwrap();

        assert_eq!(
            value,
            json!({ "type": "email", "message": "Check your email address" })
        );
    }

    #[test]
    fn test_field_error_deserialize_fails_on_missing_message() {
        let result = serde_json::from_value::<FieldError>(json!({ "type": "email" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_sign_in_reply_into_result() {
        let errors = vec![FieldError::root("nope")];

        assert_eq!(
            SignInReply::from(Err(errors.clone())).into_result(),
            Err(errors)
        );
    }

    #[test]
    fn test_form_values_default() {
        let values = FormValues::default();

        assert_eq!(values.email, "");
        assert_eq!(values.password, "");
        assert!(values.remember);
        assert_eq!(values.get(Field::Email), "");
    }
}
