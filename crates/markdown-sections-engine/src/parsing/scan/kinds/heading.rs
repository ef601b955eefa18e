/// ATX heading line (`#` .. `######`).
pub struct AtxHeading;

impl AtxHeading {
    pub const MARK: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Heading level of `line`, if it is an ATX heading.
    ///
    /// Requires a space, tab or end of line after the `#` run so `#tag` stays text.
    pub fn level(line: &str) -> Option<u8> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let rest = &line.as_bytes()[indent..];
        let hashes = rest.iter().take_while(|&&b| b == Self::MARK).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        match rest.get(hashes) {
            None | Some(b' ') | Some(b'\t') => Some(hashes as u8),
            _ => None,
        }
    }
}
