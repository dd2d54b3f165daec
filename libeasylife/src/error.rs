//! Error types for EasyLife

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EasyLifeError>;

#[derive(Error, Debug)]
pub enum EasyLifeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Registration(#[from] RegistrationError),

    #[error("{0}")]
    Listing(#[from] ListingError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl EasyLifeError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EasyLifeError::Config(_) => 1,
            EasyLifeError::Logging(_) => 1,
            EasyLifeError::Registration(RegistrationError::InvalidSellerCode) => 2,
            EasyLifeError::Registration(_) => 3,
            EasyLifeError::Listing(_) => 3,
            EasyLifeError::Navigation(_) => 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Registration failures. Messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Неверный код продавца!")]
    InvalidSellerCode,

    #[error("Введите имя для регистрации")]
    EmptyName,

    #[error("Вы уже зарегистрированы")]
    AlreadyRegistered,
}

/// Product creation failures. Messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    #[error("Пожалуйста, отсканируйте QR-код товара!")]
    QrNotScanned,

    #[error("Создавать товары могут только продавцы")]
    NotSeller,

    #[error("Укажите название товара")]
    EmptyName,

    #[error("Укажите цену товара")]
    EmptyPrice,

    #[error("Некорректная цена: {0}")]
    InvalidPrice(String),

    #[error("Цена не может быть отрицательной")]
    NegativePrice,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Страница «{0}» доступна только продавцам")]
    SellerOnly(&'static str),
}
