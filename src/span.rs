use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("[{}:{}]", start, end)]
pub struct Span {
    // inclusive byte range
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    /// Returns the source text covered by this span, or an empty string when
    /// the span does not lie on character boundaries of `input`.
    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..=self.end).unwrap_or("")
    }

    /// Marker line placing `^` under the covered characters of `input`.
    pub fn underline(&self, input: &str) -> String {
        let lead = input.get(..self.start).map_or(0, |s| s.chars().count());
        let width = self.str_from_source(input).chars().count().max(1);
        format!("{}{}", " ".repeat(lead), "^".repeat(width))
    }
}
