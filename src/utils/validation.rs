use crate::utils::error::{GatewayError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GatewayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GatewayError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects the `YOUR_...` placeholders shipped in sample configs, and any
/// `${VAR}` reference left unresolved by environment substitution.
pub fn validate_not_placeholder(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.contains("YOUR_") || value.contains("${") {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Placeholder value has not been filled in".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("supabase.url", "https://example.supabase.co").is_ok());
        assert!(validate_url("supabase.url", "http://localhost:54321").is_ok());
        assert!(validate_url("supabase.url", "").is_err());
        assert!(validate_url("supabase.url", "invalid-url").is_err());
        assert!(validate_url("supabase.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("local.file", "league-data.json").is_ok());
        assert!(validate_path("local.file", "").is_err());
        assert!(validate_path("local.file", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_not_placeholder() {
        assert!(validate_not_placeholder("firebase.api_key", "AIzaSyExample").is_ok());
        assert!(validate_not_placeholder("firebase.api_key", "YOUR_API_KEY").is_err());
        assert!(validate_not_placeholder("firebase.api_key", "https://YOUR_PROJECT.supabase.co").is_err());
        assert!(validate_not_placeholder("firebase.api_key", "${FIREBASE_API_KEY}").is_err());
        assert!(validate_not_placeholder("firebase.api_key", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("firebase", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("firebase", &absent),
            Err(GatewayError::MissingConfigError { .. })
        ));
    }
}
