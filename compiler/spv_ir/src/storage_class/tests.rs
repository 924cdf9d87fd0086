use super::*;
use crate::WordError;
use pretty_assertions::assert_eq;

#[test]
fn words_are_dense() {
    for (i, &class) in StorageClass::ALL.iter().enumerate() {
        assert_eq!(class.word() as usize, i);
    }
    assert_eq!(StorageClass::ALL.len(), 13);
}

#[test]
fn unknown_storage_class_rejected() {
    assert_eq!(
        StorageClass::from_word(13),
        Err(WordError::UnknownEnum {
            kind: "StorageClass",
            word: 13
        })
    );
}

#[test]
fn capability_mapping() {
    assert_eq!(StorageClass::Private.capability(), Capability::Shader);
    assert_eq!(StorageClass::Uniform.capability(), Capability::Shader);
    assert_eq!(
        StorageClass::Generic.capability(),
        Capability::GenericPointer
    );
    assert_eq!(
        StorageClass::AtomicCounter.capability(),
        Capability::AtomicStorage
    );
    assert_eq!(StorageClass::CrossWorkgroup.capability(), Capability::Kernel);
    assert_eq!(StorageClass::Function.capability(), Capability::Kernel);
}
