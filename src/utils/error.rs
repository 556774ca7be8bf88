use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Cannot combine products of different kinds: {left} and {right}")]
    TypeIncompatibleError { left: String, right: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Field '{field}' has the wrong type, expected {expected}")]
    InvalidFieldTypeError { field: String, expected: String },

    #[error("Product not found: {name}")]
    ProductNotFoundError { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error on '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingFieldError {
            field: field.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ValidationError { field, message } => {
                format!("Некорректное значение поля '{}': {}", field, message)
            }
            CatalogError::TypeIncompatibleError { left, right } => {
                format!("Нельзя складывать товары разных видов ({} и {})", left, right)
            }
            CatalogError::MissingFieldError { field } => {
                format!("В данных товара отсутствует поле '{}'", field)
            }
            CatalogError::InvalidFieldTypeError { field, expected } => {
                format!("Поле '{}' должно быть типа {}", field, expected)
            }
            CatalogError::ProductNotFoundError { name } => {
                format!("Товар '{}' не найден в каталоге", name)
            }
            CatalogError::IoError(e) => format!("Не удалось прочитать файл: {}", e),
            CatalogError::SerializationError(e) => format!("Некорректный JSON: {}", e),
            CatalogError::ConfigError { field, message } => {
                format!("Ошибка конфигурации '{}': {}", field, message)
            }
            CatalogError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Недопустимое значение '{}' для '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::ValidationError { .. } => {
                "Проверьте, что у каждого товара положительные цена и количество"
            }
            CatalogError::TypeIncompatibleError { .. } => {
                "Складывать можно только товары одного вида"
            }
            CatalogError::MissingFieldError { .. } | CatalogError::InvalidFieldTypeError { .. } => {
                "У каждого товара должны быть поля name, description, price и quantity"
            }
            CatalogError::ProductNotFoundError { .. } => {
                "Укажите название товара точно так же, как в файле данных"
            }
            CatalogError::IoError(_) => "Убедитесь, что файл существует и доступен для чтения",
            CatalogError::SerializationError(_) => {
                "Файл данных должен содержать JSON-массив категорий"
            }
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Проверьте TOML-конфигурацию и параметры командной строки"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_messages_are_russian() {
        let err = CatalogError::validation("quantity", "Quantity must be a positive integer, got 0");
        assert_eq!(
            err.user_friendly_message(),
            "Некорректное значение поля 'quantity': Quantity must be a positive integer, got 0"
        );
        assert_eq!(
            err.recovery_suggestion(),
            "Проверьте, что у каждого товара положительные цена и количество"
        );

        let err = CatalogError::ProductNotFoundError {
            name: "Nokia".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: Nokia");
        assert_eq!(
            err.recovery_suggestion(),
            "Укажите название товара точно так же, как в файле данных"
        );
    }
}
