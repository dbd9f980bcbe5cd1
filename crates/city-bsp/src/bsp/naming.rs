//! Sequential node names.

/// Hands out `n0000`, `n0001`, ... for the nodes of one tree build.
///
/// Names exist for debugging and export only; nodes are never compared by
/// name. Each build owns its own namer, so two builds never share a
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct NodeNamer {
    issued: usize,
}

impl NodeNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused name.
    pub fn next_name(&mut self) -> String {
        let name = format!("n{:04}", self.issued);
        self.issued += 1;
        name
    }

    /// Number of names handed out so far.
    #[inline]
    pub fn issued(&self) -> usize {
        self.issued
    }
}
