use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base32Error {
    #[error("byte array is empty")]
    EmptyBytes,

    #[error("string is empty")]
    EmptyString,

    #[error("character {character:?} at position {position} is not Nano base-32")]
    InvalidCharacter { character: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("account id must start with `nano_` or `xrb_`")]
    InvalidPrefix,

    #[error("account id body must be 60 characters, got {0}")]
    InvalidLength(usize),

    #[error("account id is not base-32: {0}")]
    InvalidEncoding(#[from] Base32Error),

    #[error("account id has non-zero padding bits")]
    InvalidPadding,

    #[error("account id checksum mismatch")]
    ChecksumMismatch,
}
