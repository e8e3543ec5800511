/// LIFO operand storage for the postfix evaluator.
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack(vec![])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, v: T) {
        self.0.push(v)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    /// Pops the top two values as `(second, top)`, or leaves the stack
    /// untouched when it holds fewer than two.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.len() < 2 {
            return None;
        }
        let top = self.0.pop()?;
        let second = self.0.pop()?;
        Some((second, top))
    }

    /// Takes the single remaining value, failing with the current depth
    /// when the stack does not hold exactly one.
    pub fn into_single(mut self) -> Result<T, usize> {
        match self.len() {
            1 => self.0.pop().ok_or(0),
            n => Err(n),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
