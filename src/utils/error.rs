use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed while waiting for an answer")]
    InputClosed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },
}

impl RegistryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Falha de leitura/escrita no terminal: {}", e),
            RegistryError::InputClosed => "Entrada encerrada.".to_string(),
            RegistryError::ConfigError { message } => format!("Configuração inválida: {}", message),
            RegistryError::TomlError(e) => format!("Arquivo de configuração mal formado: {}", e),
            RegistryError::ValidationError { field, message } => {
                format!("Valor inválido em '{}': {}", field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
