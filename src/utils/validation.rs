use crate::core::ImageSettings;
use crate::utils::{OptimizerResult, ValidationError};

/// Validates image processing settings
pub fn validate_settings(settings: &ImageSettings) -> OptimizerResult<()> {
    if settings.quality == 0 || settings.quality > 100 {
        return Err(ValidationError::settings(format!(
            "Invalid quality value: {}. Must be between 1 and 100",
            settings.quality
        ))
        .into());
    }

    if settings.max_width == 0 {
        return Err(ValidationError::settings("Max width cannot be 0").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::OptimizerError;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_settings(&ImageSettings::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        for settings in [
            ImageSettings { quality: 0, ..ImageSettings::default() },
            ImageSettings { quality: 101, ..ImageSettings::default() },
            ImageSettings { max_width: 0, ..ImageSettings::default() },
        ] {
            let err = validate_settings(&settings).unwrap_err();
            assert!(matches!(err, OptimizerError::Validation(ValidationError::Settings(_))));
        }
    }
}
