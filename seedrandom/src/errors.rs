use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleError {
        InvalidWindow(min: f64, max: f64) {
            display("cannot sample from the window [{}, {}]", min, max)
        }
        Exhausted(attempts: usize) {
            display("no value inside the window after {} attempts", attempts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SampleError::InvalidWindow(10.0, 1.0).to_string(),
                   "cannot sample from the window [10, 1]");
        assert_eq!(SampleError::Exhausted(3).to_string(),
                   "no value inside the window after 3 attempts");
    }
}
