//! Заявка с формы обратной связи и правила её проверки.
//!
//! Одни и те же правила применяются во frontend перед отправкой
//! и в backend при приёме.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MAX_LEN: usize = 100;
pub const MESSAGE_MAX_LEN: usize = 2000;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Ошибки проверки заявки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactRequestError {
    #[error("Укажите имя")]
    NameRequired,

    #[error("Имя не должно превышать 100 символов")]
    NameTooLong,

    #[error("Укажите email")]
    EmailRequired,

    #[error("Некорректный email")]
    EmailInvalid,

    #[error("Телефон должен содержать от 10 до 15 цифр")]
    PhoneInvalid,

    #[error("Введите сообщение")]
    MessageRequired,

    #[error("Сообщение не должно превышать 2000 символов")]
    MessageTooLong,
}

/// Заявка с формы "Отправить запрос"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// Необязательное поле
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    /// Проверить заявку; возвращает первую найденную ошибку
    pub fn validate(&self) -> Result<(), ContactRequestError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactRequestError::NameRequired);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ContactRequestError::NameTooLong);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactRequestError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(ContactRequestError::EmailInvalid);
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(ContactRequestError::PhoneInvalid);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactRequestError::MessageRequired);
        }
        if message.chars().count() > MESSAGE_MAX_LEN {
            return Err(ContactRequestError::MessageTooLong);
        }

        Ok(())
    }

    /// Копия с обрезанными пробелами по краям полей
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_valid_phone(phone: &str) -> bool {
    let mut digits = 0;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            '+' | '(' | ')' | '-' | ' ' => {}
            _ => return false,
        }
    }
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// Ответ backend на принятую заявку
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequestAccepted {
    pub status: String,
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Иван".to_string(),
            email: "ivan@example.ru".to_string(),
            phone: "+7 (495) 123-45-67".to_string(),
            message: "Нужен коммутатор на 48 портов".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_phone_is_optional() {
        let req = ContactRequest {
            phone: "   ".to_string(),
            ..valid()
        };
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let req = ContactRequest {
            name: "  ".to_string(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ContactRequestError::NameRequired));

        let req = ContactRequest {
            email: String::new(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ContactRequestError::EmailRequired));

        let req = ContactRequest {
            message: "\n".to_string(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ContactRequestError::MessageRequired));
    }

    #[test]
    fn test_email_rules() {
        for bad in ["ivan", "ivan@", "@example.ru", "ivan@example", "a@b@c.ru", "iv an@x.ru", "ivan@.ru"] {
            let req = ContactRequest {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(
                req.validate(),
                Err(ContactRequestError::EmailInvalid),
                "email {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_phone_rules() {
        let short = ContactRequest {
            phone: "123-45".to_string(),
            ..valid()
        };
        assert_eq!(short.validate(), Err(ContactRequestError::PhoneInvalid));

        let letters = ContactRequest {
            phone: "+7 495 CALL-NOW".to_string(),
            ..valid()
        };
        assert_eq!(letters.validate(), Err(ContactRequestError::PhoneInvalid));

        let plain = ContactRequest {
            phone: "84951234567".to_string(),
            ..valid()
        };
        assert_eq!(plain.validate(), Ok(()));
    }

    #[test]
    fn test_length_limits() {
        let req = ContactRequest {
            name: "я".repeat(NAME_MAX_LEN + 1),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ContactRequestError::NameTooLong));

        let req = ContactRequest {
            message: "x".repeat(MESSAGE_MAX_LEN + 1),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ContactRequestError::MessageTooLong));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ContactRequestError::PhoneInvalid.to_string(),
            "Телефон должен содержать от 10 до 15 цифр"
        );
    }

    #[test]
    fn test_trimmed() {
        let req = ContactRequest {
            name: "  Иван ".to_string(),
            ..valid()
        };
        assert_eq!(req.trimmed().name, "Иван");
    }

    #[test]
    fn test_phone_defaults_when_missing_in_json() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"Иван","email":"ivan@example.ru","message":"Привет"}"#,
        )
        .expect("parse");
        assert!(req.phone.is_empty());
        assert_eq!(req.validate(), Ok(()));
    }
}
