//! Request DTOs for the code share API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{Result, ShareError};

/// Request body for storing a text (POST /drops)
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The text to share
    pub text: String,
}

impl PutRequest {
    /// Validates the request before the store is touched.
    ///
    /// Rejects text that is empty after trimming or longer than
    /// `max_text_length` characters.
    pub fn validate(&self, max_text_length: usize) -> Result<()> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ShareError::EmptyInput);
        }

        let length = text.chars().count();
        if length > max_text_length {
            return Err(ShareError::TextTooLong {
                length,
                max: max_text_length,
            });
        }
        Ok(())
    }
}
