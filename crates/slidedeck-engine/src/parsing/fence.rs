/// Whether a line sits inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

/// Two-state automaton tracking fenced code blocks line by line.
///
/// A line whose trimmed text starts with [`FenceScanner::MARKER`] toggles the
/// state before the caller interprets it: an opening fence line reports
/// [`FenceState::Inside`], a closing one [`FenceState::Outside`]. Callers
/// decide what to do with the fence line itself.
#[derive(Debug, Clone, Default)]
pub struct FenceScanner {
    state: FenceState,
}

impl FenceScanner {
    pub const MARKER: &'static str = "```";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::MARKER)
    }

    /// Feed the next line, returning the state in effect for it.
    pub fn advance(&mut self, line: &str) -> FenceState {
        if Self::is_fence(line) {
            self.state = match self.state {
                FenceState::Outside => FenceState::Inside,
                FenceState::Inside => FenceState::Outside,
            };
        }
        self.state
    }

    pub fn state(&self) -> FenceState {
        self.state
    }

    pub fn is_outside(&self) -> bool {
        self.state == FenceState::Outside
    }
}

/// Pair every line of `text` with its fence state.
pub fn scan_lines(text: &str) -> impl Iterator<Item = (&str, FenceState)> {
    let mut scanner = FenceScanner::new();
    text.split('\n').map(move |line| (line, scanner.advance(line)))
}

/// Split `text` into segments at lines accepted by `is_boundary` outside
/// fences. Boundary lines are dropped; the final segment is always emitted.
pub(crate) fn split_outside_fences(text: &str, is_boundary: impl Fn(&str) -> bool) -> Vec<String> {
    let mut segments = vec![];
    let mut current: Vec<&str> = vec![];

    for (line, state) in scan_lines(text) {
        if state == FenceState::Outside && is_boundary(line) {
            segments.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    segments.push(current.join("\n"));
    segments
}
