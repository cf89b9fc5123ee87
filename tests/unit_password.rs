use na_meste::na_meste_core::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_hash_password_empty() {
    let hash = hash_password("").unwrap();

    assert!(verify_password("", &hash).unwrap());
    assert!(!verify_password(" ", &hash).unwrap());
}

#[test]
fn test_hash_password_is_salted() {
    let first = hash_password("samepassword").unwrap();
    let second = hash_password("samepassword").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("samepassword", &first).unwrap());
    assert!(verify_password("samepassword", &second).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword").unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
    assert!(!verify_password("Correctpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_unicode() {
    let password = "пароль🔒";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("пароль", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_digest() {
    let result = verify_password("password", "not-a-bcrypt-digest");

    let err = result.unwrap_err();
    assert_eq!(err.status.as_u16(), 500);
}
