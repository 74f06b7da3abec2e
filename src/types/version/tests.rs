use super::*;

#[test]
fn version_accepts_one() {
    let version = Version::try_new(1).unwrap();
    assert_eq!(version.into_inner(), 1);
}

#[test]
fn version_rejects_zero() {
    let result = Version::try_new(0);
    result.unwrap_err();
}

#[test]
fn version_ordering() {
    let first = Version::try_new(1).unwrap();
    let later = Version::try_new(7).unwrap();
    assert!(first < later);
}
