use crate::utils::error::Result;

/// Line-oriented interactive channel the operations prompt through.
pub trait Prompter {
    /// Shows `prompt` and returns the next input line without its line terminator.
    /// End of input is `RegistryError::InputClosed`.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes one line of output.
    fn say(&mut self, line: &str) -> Result<()>;
}
