//! JWT token creation and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::types::{AuthConfig, Claims};

/// Session tokens expire one hour after issue.
const TOKEN_TTL_HOURS: i64 = 1;

/// Create a new JWT token for a caller identity.
pub fn create_token(
    config: &AuthConfig,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::hours(TOKEN_TTL_HOURS);

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Validate a JWT token and return its claims.
pub fn validate_token(
    config: &AuthConfig,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
        }
    }

    #[test]
    fn create_and_validate_token() {
        let config = test_config();
        let token = create_token(&config, "tenant@example.com").expect("should create token");

        let claims = validate_token(&config, &token).expect("should validate token");
        assert_eq!(claims.sub, "tenant@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn malformed_token_rejected() {
        let config = test_config();
        assert!(validate_token(&config, "not-a-token").is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let config = test_config();
        let token = create_token(&config, "tenant@example.com").expect("should create token");

        let wrong_config = AuthConfig {
            jwt_secret: "wrong-secret".to_string(),
        };
        assert!(validate_token(&wrong_config, &token).is_err());
    }

    #[test]
    fn tampered_token_rejected() {
        let config = test_config();
        let token = create_token(&config, "tenant@example.com").expect("should create token");

        // Flip a character in the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(validate_token(&config, &tampered).is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let config = test_config();

        // Issue a token that expired two hours ago, beyond validation leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: "tenant@example.com".to_string(),
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .expect("should encode");

        assert!(validate_token(&config, &token).is_err());
    }
}
