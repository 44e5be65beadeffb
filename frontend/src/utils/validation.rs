use thiserror::Error;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MAX_LEN: usize = 20;

/// Reason a field value failed validation. Rendered inline under the
/// offending input, never in the top-level error area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FieldError(String);

impl FieldError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::new("이메일을 입력해주세요."));
    }
    if !has_email_shape(value) {
        return Err(FieldError::new("이메일 형식이 올바르지 않습니다."));
    }
    Ok(())
}

pub fn check_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::new("비밀번호를 입력해주세요."));
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(FieldError::new(format!(
            "비밀번호는 {}자 이상이어야 합니다.",
            PASSWORD_MIN_LEN
        )));
    }
    Ok(())
}

pub fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new("이름을 입력해주세요."));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(FieldError::new(format!(
            "이름은 {}자 이하여야 합니다.",
            NAME_MAX_LEN
        )));
    }
    if !value.chars().all(is_name_char) {
        return Err(FieldError::new("이름에 사용할 수 없는 문자가 있습니다."));
    }
    Ok(())
}

/// Non-throwing affordance predicates. Derived from the validators above so
/// button gating and inline messages can never disagree.
pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_invalid_name(value: &str) -> bool {
    check_name(value).is_err()
}

// local@domain, domain has at least one dot and no empty label.
fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'
}
