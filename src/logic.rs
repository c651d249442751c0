use tracing::{info, warn};

use crate::commands::CommandResult;
use crate::error::{EstateError, EstateResult};
use crate::model::ModelManager;
use crate::parser;
use crate::storage;

/// Runs command text against the model and persists the result.
pub struct Logic {
    model: ModelManager,
}

impl Logic {
    pub fn new(model: ModelManager) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Parses and executes one command, then saves the address book if it may have changed.
    pub fn execute(&mut self, command_text: &str) -> EstateResult<CommandResult> {
        info!(command = command_text, "user command");

        let command = parser::parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates_data() {
            let path = self.model.address_book_file_path().to_path_buf();
            storage::save_address_book(&path, self.model.address_book()).map_err(|e| {
                warn!(file = %path.display(), error = %e, "could not save address book");
                EstateError::Save(format!("{}: {}", path.display(), e))
            })?;
        }
        Ok(result)
    }
}
