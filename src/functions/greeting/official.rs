// src/functions/greeting/official.rs
// =============================================================================
// The formal greeting. Same function name as hello::hello, different module.
// =============================================================================

// Builds a formal greeting for `name`
pub fn hello(name: &str) -> String {
    format!("Good day, {}. It is a pleasure to meet you.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_hello() {
        assert_eq!(
            hello("Sam"),
            "Good day, Sam. It is a pleasure to meet you."
        );
    }

    #[test]
    fn test_differs_from_informal() {
        assert_ne!(hello("Sam"), super::super::hello::hello("Sam"));
    }
}
