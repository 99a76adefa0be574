use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Errors crossing a content store boundary. The display strings are what
/// the admin sees, so they stay human-readable rather than diagnostic.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Current password is incorrect")]
    CurrentPassword,

    #[error("Password must be at least 8 characters")]
    WeakPassword,

    #[error("This reset link is invalid or has expired")]
    ResetTokenInvalid,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed. The message stays generic.
    #[error("An unexpected error occurred")]
    Hash,
}

/// Upload validation failures are raised before any disk or network write.
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Please select an image file")]
    NotAnImage,

    #[error("Image size must be less than 5MB")]
    TooLarge,

    #[error("Image must be a JPG, PNG, GIF or WebP file")]
    UnsupportedType,

    #[error("Could not save the image: {0}")]
    Io(#[from] std::io::Error),
}
