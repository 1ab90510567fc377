#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The source text is not valid under the configured grammar.
    SourceParseFailure = 1001,

    /// The metadata record has no usable `name`.
    ///
    /// e.g. `export default @Metadata({...}) class {}` or `Metadata({ name: '' })`.
    MetadataMissingName = 2001,

    /// The metadata object does not carry a non-empty string `thumbnail`.
    MetadataMissingThumbnail = 2002,

    /// The `thumbnail` path does not exist relative to the context directory.
    ThumbnailNotFound = 2003,
}

/// Render an error code the way diagnostics print it, e.g. `CM2002`.
pub fn cm_error_code(code: ErrorCode) -> String {
    format!("CM{}", code as i32)
}
