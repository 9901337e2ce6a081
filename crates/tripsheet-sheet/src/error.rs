#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetError {
    /// A measured height or inset was negative, NaN or infinite.
    InvalidGeometry { what: &'static str, value: f32 },
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::InvalidGeometry { what, value } => {
                write!(f, "invalid sheet geometry: {what} = {value}")
            }
        }
    }
}

impl std::error::Error for SheetError {}
