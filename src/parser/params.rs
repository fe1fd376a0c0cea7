//! CSI parameter parsing
//!
//! Handles parsing of semicolon-separated numeric parameters and the
//! explicit cursor used to walk them.

/// Parse the parameter text of a CSI sequence.
///
/// Empty text yields no parameters. Otherwise every `;`-separated field
/// becomes one value, with empty fields reading as 0. A bare SGR (`m`)
/// with no parameters is equivalent to `0`.
pub fn parse_params(text: &str, command: char) -> Vec<u32> {
    let mut params: Vec<u32> = if text.is_empty() {
        Vec::new()
    } else {
        text.split(';').map(parse_field).collect()
    };

    if command == 'm' && params.is_empty() {
        params.push(0);
    }

    params
}

/// Parse a single field; non-digits never reach here because the scanner
/// only admits `[0-9;]`.
fn parse_field(field: &str) -> u32 {
    field.bytes().fold(0u32, |acc, byte| {
        acc.saturating_mul(10)
            .saturating_add(u32::from(byte.wrapping_sub(b'0')))
    })
}

/// Cursor over a parameter list.
///
/// Extended colors consume a variable number of trailing parameters, so
/// every consumer advances through this instead of indexing by hand.
#[derive(Debug, Clone)]
pub struct ParamCursor<'a> {
    params: &'a [u32],
    pos: usize,
}

impl<'a> ParamCursor<'a> {
    pub fn new(params: &'a [u32]) -> Self {
        Self { params, pos: 0 }
    }

    /// Index of the next unread parameter
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.params.len()
    }

    /// Look at the parameter `offset` places ahead without consuming it
    pub fn peek(&self, offset: usize) -> Option<u32> {
        self.params.get(self.pos + offset).copied()
    }

    /// Consume one parameter
    pub fn next(&mut self) -> Option<u32> {
        let value = self.peek(0)?;
        self.pos += 1;
        Some(value)
    }

    /// Consume up to `n` parameters, returning the ones that were present
    pub fn take(&mut self, n: usize) -> &'a [u32] {
        let end = (self.pos + n).min(self.params.len());
        let taken = &self.params[self.pos..end];
        self.pos = end;
        taken
    }
}
