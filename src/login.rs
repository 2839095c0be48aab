use log::info;

/// The login form's controlled fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// What a submit leaves behind. The form is a stub: nothing is sent and
/// nothing is validated beyond the browser's own `required`/`type=email`.
/// Suppressing the browser's default navigation is the page's job
/// (`pages::login`, `on_submit`).
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSubmission {
    pub email: String,
}

impl LoginForm {
    /// Records the values locally and clears the form.
    pub fn submit(&mut self) -> LoginSubmission {
        let LoginForm { email, password } = std::mem::take(self);
        info!(
            "Login submitted for {} ({})",
            email,
            if password.is_empty() { "no password" } else { "password set" }
        );
        LoginSubmission { email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_keeps_only_the_email_and_clears_the_form() {
        let mut form = LoginForm {
            email: "a@b.com".into(),
            password: "x".into(),
        };

        let submission = form.submit();

        assert_eq!(
            submission,
            LoginSubmission {
                email: "a@b.com".into()
            }
        );
        assert_eq!(form, LoginForm::default());
        assert_eq!(form.submit().email, "");
    }

    #[test]
    fn password_never_travels_with_the_submission() {
        let mut form = LoginForm {
            email: "a@b.com".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{:?}", form.submit());
        assert!(!rendered.contains("hunter2"));
    }
}
