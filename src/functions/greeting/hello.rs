// src/functions/greeting/hello.rs
// =============================================================================
// The informal greeting. There is a second function called `hello` in
// official.rs - both can exist because each lives in its own module.
// =============================================================================

// Builds a friendly greeting for `name`
pub fn hello(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(hello("Susan"), "Hello, Susan!");
    }
}
