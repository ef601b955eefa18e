/// Code fence type with owned delimiter constants.
///
/// Lines inside a fence are a raw zone: never markers, never headings, and a
/// blank line inside a fence does not end a field capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence opener/closer, allowing up to three spaces of indentation.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &line[indent..];
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        sig == Some(open)
    }
}
