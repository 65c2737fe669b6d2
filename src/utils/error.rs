use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Item not found: {name}")]
    ItemNotFound { name: String },

    #[error("No item selected")]
    NoItemSelected,

    #[error("Item already on the menu: {name}")]
    DuplicateItem { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RestaurantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RestaurantError::ItemNotFound {
            name: "French fries".to_string(),
        };
        assert_eq!(err.to_string(), "Item not found: French fries");

        let err = RestaurantError::InvalidConfigValueError {
            field: "restaurant.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(err.to_string().contains("restaurant.name"));
    }
}
