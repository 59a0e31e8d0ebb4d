mod common;

#[cfg(test)]
pub mod form_tests {
    use super::common::*;

    use signin::form::*;
    use signin::types::*;
    use signin::validation::*;

    #[test]
    fn test_form_state_default() {
        let form = FormState::default();

        assert_eq!(form.values(), &FormValues::default());
        assert!(form.values().remember);
        assert!(!form.is_dirty());
        assert!(!form.is_valid());
        assert!(form.errors().is_empty());
        assert!(form.root_errors().is_empty());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_form_state_set_value_success() {
        let form = get_filled_form("a@b.com", "abcd");

        assert!(form.is_valid());
        assert!(form.errors().is_empty());
        assert!(form.can_submit());
        assert_eq!(
            form.dirty_inputs().iter().copied().collect::<Vec<_>>(),
            vec![Input::Email, Input::Password]
        );
    }

    #[test]
    fn test_form_state_set_value_only_refreshes_changed_field() {
        let mut form = FormState::default();
        form.set_email("not-an-email");

        assert_eq!(form.error(Field::Email), Some("You must enter a valid email"));
        assert_eq!(form.error(Field::Password), None);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_form_state_error_cleared_after_fix() {
        let mut form = get_filled_form("not-an-email", "ab");
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Password).is_some());

        form.set_email("a@b.com");
        assert_eq!(form.error(Field::Email), None);
        assert!(form.error(Field::Password).is_some());
        assert!(!form.is_valid());

        form.set_password("abcd");
        assert!(form.errors().is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_form_state_dirty_follows_defaults() {
        let mut form = FormState::default();

        form.set_email("a");
        assert!(form.is_dirty());

        form.set_email("");
        assert!(!form.is_dirty());
        assert_eq!(form.error(Field::Email), Some("You must enter a email"));
    }

    #[test]
    fn test_form_state_remember_marks_dirty() {
        let mut form = FormState::default();

        form.set_remember(false);
        assert!(form.dirty_inputs().contains(&Input::Remember));
        assert!(!form.can_submit());

        form.set_remember(true);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_form_state_begin_submit_fails_on_untouched_valid_defaults() {
        let mut form = FormState::with_defaults(
            Schema::sign_in(),
            FormValues::new("a@b.com", "abcd"),
        );

        assert!(form.is_valid());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_pending());
    }

    #[test]
    fn test_form_state_begin_submit_fails_on_invalid() {
        let mut form = get_filled_form("a@b.com", "ab");

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_form_state_begin_submit_success() {
        let mut form = get_filled_form("a@b.com", "abcd");

        let request = form.begin_submit();

        assert_eq!(
            request,
            Some(LoginRequest {
                email: "a@b.com".to_string(),
                password: "abcd".to_string(),
            })
        );
        assert!(form.is_pending());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_form_state_begin_submit_fails_on_pending() {
        let mut form = get_filled_form("a@b.com", "abcd");

        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_pending());
    }

    #[test]
    fn test_form_state_finish_submit_success() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.begin_submit();

        let outcome = form.finish_submit(Ok(get_seed_user_0()));

        assert_eq!(outcome, SubmitOutcome::SignedIn(get_seed_user_0()));
        assert!(outcome.is_signed_in());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.errors().is_empty());
        assert!(form.root_errors().is_empty());
    }

    #[test]
    fn test_form_state_finish_submit_distributes_errors() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.begin_submit();

        let errors = vec![
            FieldError::new(Field::Password, "Invalid credentials"),
            FieldError::new("root.server", "Try again later"),
        ];
        let outcome = form.finish_submit(Err(errors.clone()));

        assert_eq!(outcome, SubmitOutcome::Rejected(errors));
        assert_eq!(form.error(Field::Password), Some("Invalid credentials"));
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(
            form.root_error("root.server"),
            Some("Try again later")
        );
        assert!(!form.is_valid());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_form_state_later_error_overwrites_earlier() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.begin_submit();

        form.finish_submit(Err(vec![
            FieldError::new(Field::Email, "first"),
            FieldError::new(Field::Email, "second"),
        ]));

        assert_eq!(form.error(Field::Email), Some("second"));
    }

    #[test]
    fn test_form_state_set_error_unknown_field_is_form_level() {
        let mut form = get_filled_form("a@b.com", "abcd");

        form.set_error(FieldError::new("username", "Account locked"));

        assert!(form.errors().is_empty());
        assert_eq!(
            form.root_error("username"),
            Some("Account locked")
        );
    }

    #[test]
    fn test_form_state_root_errors_keep_reported_order() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.begin_submit();

        form.finish_submit(Err(vec![
            FieldError::new("root.server", "Down for maintenance"),
            FieldError::root("Too many attempts"),
            FieldError::new("root.server", "Try again later"),
        ]));

        assert_eq!(
            form.root_errors().to_vec(),
            vec![
                ("root.server".to_string(), "Try again later".to_string()),
                ("root".to_string(), "Too many attempts".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_state_external_error_cleared_by_edit() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.set_error(FieldError::new(Field::Password, "Invalid credentials"));
        assert!(!form.can_submit());

        form.set_password("abcde");

        assert_eq!(form.error(Field::Password), None);
        assert!(form.is_valid());
        assert!(form.can_submit());
    }

    #[test]
    fn test_form_state_root_error_cleared_on_next_submit() {
        let mut form = get_filled_form("a@b.com", "abcd");
        form.set_error(FieldError::root("Service unavailable"));

        form.set_email("c@d.com");
        assert_eq!(form.root_errors().len(), 1);

        assert!(form.begin_submit().is_some());
        assert!(form.root_errors().is_empty());
    }
}
