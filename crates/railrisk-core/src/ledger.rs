/// Running total of named contributions.
///
/// The risk scorer applies point deltas and the lifetime procedure applies
/// day deltas; both keep the explanation notes in the order rules fired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorLedger {
    total: f64,
    notes: Vec<String>,
}

impl FactorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, delta: f64, note: impl Into<String>) {
        self.total += delta;
        self.notes.push(note.into());
    }

    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub const fn total(&self) -> f64 {
        self.total
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn into_parts(self) -> (f64, Vec<String>) {
        (self.total, self.notes)
    }
}
