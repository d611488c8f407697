#[derive(Debug, PartialEq, Eq)]
pub enum CodeErr {
    /// Input value has set bits above the fixed word width
    InvalidLength { width: u32, value: u32 },
}
