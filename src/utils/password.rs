use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::{Rng, distributions::Alphanumeric};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "pbkdf2_sha256";
pub const DEFAULT_ITERATIONS: u32 = 870_000;
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 22;
const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_SUFFIX_LENGTH: usize = 40;

/// Hasheur PBKDF2-HMAC-SHA256
/// Format stocké: pbkdf2_sha256$iterations$salt$hash (hash en base64 standard)
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hash un mot de passe avec un salt aléatoire de 22 caractères alphanumériques
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = random_string(SALT_LENGTH);
        self.hash_with_salt(password, &salt)
    }

    fn hash_with_salt(&self, password: &str, salt: &str) -> Result<String, AppError> {
        if salt.contains('$') {
            return Err(AppError::Password("Salt must not contain '$'".to_string()));
        }

        let key = derive(password, salt, self.iterations, KEY_LENGTH)?;

        Ok(format!(
            "{}${}${}${}",
            ALGORITHM,
            self.iterations,
            salt,
            STANDARD.encode(key)
        ))
    }

    /// Vérifie un mot de passe contre un hash encodé
    /// Les itérations du hash stocké sont utilisées, pas celles du hasheur
    pub fn verify(&self, password: &str, encoded: &str) -> Result<bool, AppError> {
        if !is_usable(encoded) {
            return Ok(false);
        }

        let parts: Vec<&str> = encoded.split('$').collect();
        if parts.len() != 4 {
            return Err(AppError::Password("Invalid hash format".to_string()));
        }

        if parts[0] != ALGORITHM {
            return Err(AppError::Password(format!("Unsupported algorithm: {}", parts[0])));
        }

        let iterations = parts[1]
            .parse::<u32>()
            .map_err(|_| AppError::Password("Invalid iterations".to_string()))?;

        let expected = STANDARD
            .decode(parts[3])
            .map_err(|e| AppError::Password(format!("Base64 decode failed: {}", e)))?;

        // Un hash tronqué ou vide ne correspond à aucun mot de passe
        if expected.len() != KEY_LENGTH {
            return Ok(false);
        }

        let computed = derive(password, parts[2], iterations, KEY_LENGTH)?;

        Ok(constant_time_eq(&computed, &expected))
    }
}

/// Marqueur de mot de passe inutilisable: '!' suivi de 40 caractères aléatoires
pub fn make_unusable() -> String {
    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, random_string(UNUSABLE_SUFFIX_LENGTH))
}

pub fn is_usable(encoded: &str) -> bool {
    !encoded.is_empty() && !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

fn derive(password: &str, salt: &str, iterations: u32, length: usize) -> Result<Vec<u8>, AppError> {
    if iterations == 0 {
        return Err(AppError::Password("Iterations must be greater than 0".to_string()));
    }

    let mut key = vec![0u8; length];
    pbkdf2::<HmacSha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut key)
        .map_err(|e| AppError::Password(format!("PBKDF2 hash generation failed: {}", e)))?;

    Ok(key)
}

fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

// Comparaison en temps constant
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::new(1_000)
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hasher = fast_hasher();
        let encoded = hasher.hash("s3cret").unwrap();

        assert!(encoded.starts_with("pbkdf2_sha256$1000$"));
        assert_ne!(encoded, "s3cret");
        assert!(hasher.verify("s3cret", &encoded).unwrap());
        assert!(!hasher.verify("wrong", &encoded).unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let hasher = fast_hasher();
        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_uses_stored_iterations() {
        let encoded = PasswordHasher::new(500).hash("pw").unwrap();
        assert!(PasswordHasher::new(2_000).verify("pw", &encoded).unwrap());
    }

    #[test]
    fn test_hash_with_explicit_salt() {
        let hasher = PasswordHasher::new(10_000);
        let encoded = hasher.hash_with_salt("letmein", "seasalt").unwrap();
        let again = hasher.hash_with_salt("letmein", "seasalt").unwrap();

        assert!(encoded.starts_with("pbkdf2_sha256$10000$seasalt$"));
        assert_eq!(encoded, again);
        assert!(hasher.verify("letmein", &encoded).unwrap());
        assert!(hasher.hash_with_salt("letmein", "bad$salt").is_err());
    }

    #[test]
    fn test_unusable_password() {
        let marker = make_unusable();

        assert!(marker.starts_with('!'));
        assert_eq!(marker.len(), 41);
        assert!(!is_usable(&marker));
        assert!(!fast_hasher().verify("", &marker).unwrap());
    }

    #[test]
    fn test_digest_of_wrong_length_never_matches() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("anything", "pbkdf2_sha256$1000$salt$").unwrap());
        assert!(!hasher.verify("", "pbkdf2_sha256$1000$salt$").unwrap());

        // Premiers octets d'un vrai hash: même préfixe, longueur insuffisante
        let encoded = hasher.hash_with_salt("pw", "salt").unwrap();
        let digest = STANDARD.decode(encoded.rsplit('$').next().unwrap()).unwrap();
        let truncated = format!("pbkdf2_sha256$1000$salt${}", STANDARD.encode(&digest[..4]));
        assert!(!hasher.verify("pw", &truncated).unwrap());
    }

    #[test]
    fn test_invalid_format() {
        let hasher = fast_hasher();
        assert!(hasher.verify("pw", "pbkdf2:sha256:1000$abc$def").is_err());
        assert!(hasher.verify("pw", "md5$1$salt$hash").is_err());
    }
}
