use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmlError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error while writing KML: {0}")]
    Io(#[from] std::io::Error),

    #[error("KML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
