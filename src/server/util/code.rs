//! Random codes and passwords.

use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const RECOVERY_CODE_LENGTH: usize = 5;

/// Generates a recovery code of uppercase letters and digits.
pub fn generate_recovery_code() -> String {
    let mut rng = rand::rng();

    (0..RECOVERY_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

/// Generates a password for accounts created without one.
pub fn generate_password() -> String {
    uuid::Uuid::new_v4().to_string()
}
